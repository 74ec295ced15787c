use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One job posting as loaded from the dataset file. Never mutated after load.
///
/// Fields are free text. A missing or `null` field loads as the empty string and a
/// non-string scalar loads as its JSON text, so odd records never fail the load;
/// they just stop matching keyword filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Title", default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(rename = "Organization", default, deserialize_with = "lenient_text")]
    pub organization: String,
    /// Engineering | Science | Commerce | Education | anything else.
    #[serde(rename = "Category", default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(rename = "Location", default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(rename = "Salary", default, deserialize_with = "lenient_text")]
    pub salary: String,
    #[serde(rename = "Experience", default, deserialize_with = "lenient_text")]
    pub experience: String,
    #[serde(rename = "Qualification", default, deserialize_with = "lenient_text")]
    pub qualification: String,
    #[serde(rename = "Last Date", default, deserialize_with = "lenient_text")]
    pub last_date: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// The full dataset in load order. Read-only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct JobTable {
    records: Vec<JobRecord>,
}

impl JobTable {
    pub fn new(records: Vec<JobRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JobRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRecord> {
        self.records.iter()
    }

    /// Every record, in load order.
    pub fn all(&self) -> Subset<'_> {
        Subset::new(self.records.iter().collect())
    }

    /// The first `n` records (or fewer if the table is shorter).
    pub fn head(&self, n: usize) -> Subset<'_> {
        Subset::new(self.records.iter().take(n).collect())
    }
}

/// An ordered selection of records borrowed from a [`JobTable`].
///
/// Only ever built from table references; narrowing keeps or drops elements and
/// never creates new records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subset<'a> {
    records: Vec<&'a JobRecord>,
}

impl<'a> Subset<'a> {
    pub fn new(records: Vec<&'a JobRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a JobRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn retain<F>(mut self, mut keep: F) -> Self
    where
        F: FnMut(&JobRecord) -> bool,
    {
        self.records.retain(|r| keep(r));
        self
    }

    pub fn truncate(mut self, n: usize) -> Self {
        self.records.truncate(n);
        self
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn job(title: &str, category: &str, location: &str, experience: &str, qualification: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            organization: format!("{title} Org"),
            category: category.to_string(),
            location: location.to_string(),
            salary: "₹50,000/month".to_string(),
            experience: experience.to_string(),
            qualification: qualification.to_string(),
            last_date: "2025-12-31".to_string(),
        }
    }

    /// 2 Engineering + 3 Science records.
    pub fn small_table() -> JobTable {
        JobTable::new(vec![
            job("Site Engineer", "Engineering", "Delhi", "Fresher", "B.Tech Civil"),
            job("Research Scientist", "Science", "Bangalore", "2 years", "M.Sc Physics"),
            job("Design Engineer", "Engineering", "Pune", "1 year", "B.E Mechanical"),
            job("Lab Assistant", "Science", "Delhi", "Fresher", "B.Sc Chemistry"),
            job("Data Scientist", "Science", "Mumbai", "3 years", "PhD Statistics"),
        ])
    }

    /// `n` generic records, alternating categories.
    pub fn sized_table(n: usize) -> JobTable {
        let categories = ["Engineering", "Science", "Commerce", "Education"];
        JobTable::new(
            (0..n)
                .map(|i| job(&format!("Job {i}"), categories[i % 4], "Chennai", "2 years", "Graduate"))
                .collect(),
        )
    }
}
