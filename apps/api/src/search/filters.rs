//! Keyword Filter Chain: turns a free-text query into a subset of the job table.
//!
//! The chain is an ordered list of independent [`FilterStage`]s folded left to
//! right. Each stage sees the query, the full table and the subset produced so
//! far. Every stage except the final count override only narrows.
//!
//! Query-side tests are lower-case substring checks. Record-side tests are
//! case-insensitive regex searches, so `.` in a pattern like `B.E` is a wildcard.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::models::job::{JobRecord, JobTable, Subset};

/// Number of records kept by the recency stage.
pub const RECENT_LIMIT: usize = 15;

pub const RECENCY_KEYWORDS: &[&str] = &["latest", "recent", "new", "notifications"];
pub const COUNT_KEYWORDS: &[&str] = &["total", "count", "how many"];

/// A query lower-cased once, with the substring helpers every stage uses.
#[derive(Debug, Clone)]
pub struct QueryText {
    lower: String,
}

impl QueryText {
    pub fn new(raw: &str) -> Self {
        Self {
            lower: raw.to_lowercase(),
        }
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.lower.contains(keyword)
    }

    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }
}

/// One step of the chain: `(query, table, current) -> narrowed`.
pub trait FilterStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply<'a>(&self, query: &QueryText, table: &'a JobTable, current: Subset<'a>) -> Subset<'a>;
}

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Engineering,
    Science,
    Commerce,
    Education,
}

impl Category {
    /// Checked in this order; the first keyword found wins.
    pub const ALL: [Category; 4] = [
        Category::Engineering,
        Category::Science,
        Category::Commerce,
        Category::Education,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Category::Engineering => "engineering",
            Category::Science => "science",
            Category::Commerce => "commerce",
            Category::Education => "education",
        }
    }

    /// Exact value of the `Category` field in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            Category::Engineering => "Engineering",
            Category::Science => "Science",
            Category::Commerce => "Commerce",
            Category::Education => "Education",
        }
    }

    pub fn detect(query: &QueryText) -> Option<Category> {
        Self::ALL.into_iter().find(|c| query.contains(c.keyword()))
    }
}

pub struct CategoryStage;

impl FilterStage for CategoryStage {
    fn name(&self) -> &'static str {
        "category"
    }

    fn apply<'a>(&self, query: &QueryText, _table: &'a JobTable, current: Subset<'a>) -> Subset<'a> {
        match Category::detect(query) {
            Some(category) => current.retain(|r| r.category == category.label()),
            None => current,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field pattern stages (location, experience, qualification)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Location,
    Experience,
    Qualification,
}

impl Field {
    fn of(self, record: &JobRecord) -> &str {
        match self {
            Field::Location => &record.location,
            Field::Experience => &record.experience,
            Field::Qualification => &record.qualification,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Keep records whose field matches.
    Keep,
    /// Keep records whose field does not match.
    Exclude,
}

/// Static description of one branch: query triggers → record pattern.
pub struct RuleSpec {
    pub triggers: &'static [&'static str],
    pub pattern: &'static str,
    pub mode: MatchMode,
}

const fn keep(triggers: &'static [&'static str], pattern: &'static str) -> RuleSpec {
    RuleSpec {
        triggers,
        pattern,
        mode: MatchMode::Keep,
    }
}

pub const LOCATION_RULES: &[RuleSpec] = &[
    keep(&["delhi"], "Delhi"),
    keep(&["bangalore", "bengaluru"], "Bangalore|Bengaluru"),
    keep(&["mumbai"], "Mumbai"),
    keep(&["chennai"], "Chennai"),
    keep(&["hyderabad"], "Hyderabad"),
    keep(&["kolkata"], "Kolkata"),
    keep(&["pune"], "Pune"),
];

/// The bare `experience` branch comes last so explicit year counts win.
pub const EXPERIENCE_RULES: &[RuleSpec] = &[
    keep(&["1 year", "one year"], "1 year|1 Year|one year|1yr"),
    keep(&["2 year", "two year"], "2 year|2 Year|two year|2yr"),
    keep(&["3 year", "three year"], "3 year|3 Year|three year|3yr"),
    keep(
        &["fresher", "freshers", "no experience"],
        "fresher|Fresher|no experience|0 year",
    ),
    RuleSpec {
        triggers: &["experience"],
        pattern: "fresher|Fresher",
        mode: MatchMode::Exclude,
    },
];

pub const QUALIFICATION_GATE: &[&str] = &["qualification", "education"];

pub const QUALIFICATION_RULES: &[RuleSpec] = &[
    keep(&["b.tech", "btech", "b.e"], "B.Tech|B.E|Engineering|BE|BTech"),
    keep(&["b.sc", "bsc"], "B.Sc|Science|BSC"),
    keep(&["b.com", "bcom"], "B.Com|Commerce|BCOM"),
    keep(&["m.tech", "mtech", "m.e"], "M.Tech|M.E|ME|MTech"),
    keep(&["m.sc", "msc"], "M.Sc|MSC"),
    keep(&["mba"], "MBA"),
    keep(&["phd"], "PhD|Ph.D"),
];

struct CompiledRule {
    triggers: &'static [&'static str],
    pattern: Regex,
    mode: MatchMode,
}

/// Applies the first rule whose trigger appears in the query to one record field.
pub struct FieldPatternStage {
    name: &'static str,
    field: Field,
    /// When non-empty, the stage only runs if the query contains one of these.
    gate: &'static [&'static str],
    rules: Vec<CompiledRule>,
}

impl FieldPatternStage {
    pub fn new(
        name: &'static str,
        field: Field,
        gate: &'static [&'static str],
        specs: &[RuleSpec],
    ) -> Result<Self, regex::Error> {
        let rules = specs
            .iter()
            .map(|spec| -> Result<CompiledRule, regex::Error> {
                Ok(CompiledRule {
                    triggers: spec.triggers,
                    pattern: RegexBuilder::new(spec.pattern).case_insensitive(true).build()?,
                    mode: spec.mode,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            field,
            gate,
            rules,
        })
    }
}

impl FilterStage for FieldPatternStage {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<'a>(&self, query: &QueryText, _table: &'a JobTable, current: Subset<'a>) -> Subset<'a> {
        if !self.gate.is_empty() && !query.contains_any(self.gate) {
            return current;
        }

        let Some(rule) = self.rules.iter().find(|r| query.contains_any(r.triggers)) else {
            return current;
        };

        let field = self.field;
        match rule.mode {
            MatchMode::Keep => current.retain(|r| rule.pattern.is_match(field.of(r))),
            MatchMode::Exclude => current.retain(|r| !rule.pattern.is_match(field.of(r))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Overrides
// ────────────────────────────────────────────────────────────────────────────

/// "Latest" means the first [`RECENT_LIMIT`] in load order. Nothing is date-sorted.
pub struct RecencyStage;

impl FilterStage for RecencyStage {
    fn name(&self) -> &'static str {
        "recency"
    }

    fn apply<'a>(&self, query: &QueryText, _table: &'a JobTable, current: Subset<'a>) -> Subset<'a> {
        if query.contains_any(RECENCY_KEYWORDS) {
            current.truncate(RECENT_LIMIT)
        } else {
            current
        }
    }
}

/// Count questions answer about the whole table, discarding every earlier stage.
pub struct TotalCountStage;

impl FilterStage for TotalCountStage {
    fn name(&self) -> &'static str {
        "total_count"
    }

    fn apply<'a>(&self, query: &QueryText, table: &'a JobTable, current: Subset<'a>) -> Subset<'a> {
        if query.contains_any(COUNT_KEYWORDS) {
            table.all()
        } else {
            current
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Chain
// ────────────────────────────────────────────────────────────────────────────

pub struct KeywordFilterChain {
    stages: Vec<Box<dyn FilterStage>>,
}

impl KeywordFilterChain {
    /// Builds the standard chain:
    /// category → location → experience → qualification → recency → total count.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self::with_stages(vec![
            Box::new(CategoryStage),
            Box::new(FieldPatternStage::new("location", Field::Location, &[], LOCATION_RULES)?),
            Box::new(FieldPatternStage::new(
                "experience",
                Field::Experience,
                &[],
                EXPERIENCE_RULES,
            )?),
            Box::new(FieldPatternStage::new(
                "qualification",
                Field::Qualification,
                QUALIFICATION_GATE,
                QUALIFICATION_RULES,
            )?),
            Box::new(RecencyStage),
            Box::new(TotalCountStage),
        ]))
    }

    pub fn with_stages(stages: Vec<Box<dyn FilterStage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn resolve<'a>(&self, query: &str, table: &'a JobTable) -> Subset<'a> {
        let query = QueryText::new(query);
        self.stages.iter().fold(table.all(), |current, stage| {
            let before = current.len();
            let next = stage.apply(&query, table, current);
            trace!(stage = stage.name(), before, after = next.len(), "filter stage applied");
            next
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::fixtures::{job, sized_table, small_table};

    fn chain() -> KeywordFilterChain {
        KeywordFilterChain::new().unwrap()
    }

    #[test]
    fn test_stage_order_is_fixed() {
        assert_eq!(
            chain().stage_names(),
            vec!["category", "location", "experience", "qualification", "recency", "total_count"]
        );
    }

    #[test]
    fn test_engineering_jobs_scenario() {
        let table = small_table();
        let subset = chain().resolve("Engineering jobs", &table);
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.category == "Engineering"));
    }

    #[test]
    fn test_single_category_keyword_only_returns_that_category() {
        let table = sized_table(20);
        for category in Category::ALL {
            let query = format!("show me {} openings", category.keyword());
            let subset = chain().resolve(&query, &table);
            assert_eq!(subset.len(), 5, "query: {query}");
            assert!(subset.iter().all(|r| r.category == category.label()));
        }
    }

    #[test]
    fn test_first_category_wins() {
        let table = small_table();
        // "engineering" is checked before "science"; no OR of categories.
        let subset = chain().resolve("engineering or science", &table);
        assert!(subset.iter().all(|r| r.category == "Engineering"));
    }

    #[test]
    fn test_category_match_is_exact() {
        let table = JobTable::new(vec![job("X", "engineering", "Delhi", "", "")]);
        assert!(chain().resolve("engineering", &table).is_empty());
    }

    #[test]
    fn test_location_filter_is_case_insensitive_substring() {
        let table = JobTable::new(vec![
            job("A", "Science", "NEW DELHI", "", ""),
            job("B", "Science", "Noida", "", ""),
        ]);
        let subset = chain().resolve("jobs in delhi", &table);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset.iter().next().unwrap().title, "A");
    }

    #[test]
    fn test_bengaluru_matches_bangalore_records() {
        let table = JobTable::new(vec![
            job("A", "Science", "Bangalore", "", ""),
            job("B", "Science", "Bengaluru, Karnataka", "", ""),
            job("C", "Science", "Chennai", "", ""),
        ]);
        assert_eq!(chain().resolve("bengaluru roles", &table).len(), 2);
    }

    #[test]
    fn test_category_and_location_combine() {
        let table = small_table();
        let subset = chain().resolve("science jobs in delhi", &table);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset.iter().next().unwrap().title, "Lab Assistant");
    }

    #[test]
    fn test_one_year_experience() {
        let table = small_table();
        let subset = chain().resolve("jobs with one year experience", &table);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset.iter().next().unwrap().title, "Design Engineer");
    }

    #[test]
    fn test_fresher_filter() {
        let table = small_table();
        let subset = chain().resolve("Fresher jobs", &table);
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.experience == "Fresher"));
    }

    #[test]
    fn test_bare_experience_excludes_freshers() {
        let table = small_table();
        let subset = chain().resolve("jobs that need experience", &table);
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|r| r.experience != "Fresher"));
    }

    #[test]
    fn test_qualification_needs_gate_keyword() {
        let table = small_table();
        // No "qualification"/"education" in the query: mba is ignored.
        assert_eq!(chain().resolve("mba", &table).len(), 5);
        let subset = chain().resolve("phd qualification", &table);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset.iter().next().unwrap().title, "Data Scientist");
    }

    #[test]
    fn test_btech_qualification() {
        let table = small_table();
        let subset = chain().resolve("Jobs requiring B.Tech qualification", &table);
        let titles: Vec<_> = subset.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Site Engineer", "Design Engineer"]);
    }

    #[test]
    fn test_recency_truncates_to_fifteen() {
        let table = sized_table(40);
        let subset = chain().resolve("latest jobs", &table);
        assert_eq!(subset.len(), RECENT_LIMIT);
        assert!(std::ptr::eq(subset.iter().next().unwrap(), table.get(0).unwrap()));
    }

    #[test]
    fn test_recency_never_grows_filtered_subset() {
        let table = sized_table(40);
        let filtered = chain().resolve("science", &table).len();
        let recent = chain().resolve("recent science", &table).len();
        assert_eq!(filtered, 10);
        assert_eq!(recent, 10);
    }

    #[test]
    fn test_total_overrides_every_filter() {
        let table = sized_table(30);
        for query in [
            "total jobs",
            "total engineering jobs in delhi",
            "how many fresher jobs need mba qualification",
            "count the latest science notifications",
        ] {
            let subset = chain().resolve(query, &table);
            assert_eq!(subset.len(), table.len(), "query: {query}");
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let table = small_table();
        assert!(chain().resolve("commerce jobs in kolkata", &table).is_empty());
    }

    #[test]
    fn test_unrecognized_query_returns_full_table() {
        let table = small_table();
        assert_eq!(chain().resolve("anything good?", &table).len(), table.len());
    }

    #[test]
    fn test_each_narrowing_stage_is_monotonic() {
        let table = small_table();
        let query = QueryText::new("science jobs in delhi for freshers with b.sc qualification");
        let stages: Vec<Box<dyn FilterStage>> = vec![
            Box::new(CategoryStage),
            Box::new(FieldPatternStage::new("location", Field::Location, &[], LOCATION_RULES).unwrap()),
            Box::new(FieldPatternStage::new("experience", Field::Experience, &[], EXPERIENCE_RULES).unwrap()),
            Box::new(
                FieldPatternStage::new(
                    "qualification",
                    Field::Qualification,
                    QUALIFICATION_GATE,
                    QUALIFICATION_RULES,
                )
                .unwrap(),
            ),
            Box::new(RecencyStage),
        ];
        let mut current = table.all();
        for stage in &stages {
            let before = current.len();
            current = stage.apply(&query, &table, current);
            assert!(current.len() <= before, "stage {} grew the subset", stage.name());
        }
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn test_results_are_table_references() {
        let table = small_table();
        let subset = chain().resolve("science", &table);
        for record in subset.iter() {
            assert!(table.iter().any(|t| std::ptr::eq(t, record)));
        }
    }
}
