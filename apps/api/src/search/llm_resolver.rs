//! LLM Resolver: asks the completion service which jobs match a query.
//!
//! Flow: build prompt (full table + query) → `CompletionService::complete` →
//! `parse_completion` → subset of table references.
//!
//! Transport and content errors are returned as `LlmError`; the pipeline treats
//! every one of them as "fall back to keyword search". A reply that simply lacks
//! the ANSWER/INDICES markers is not an error: it resolves to the first
//! [`UNSTRUCTURED_LIMIT`] jobs.

use std::collections::HashSet;
use std::fmt::Write;
use std::sync::Arc;

use tracing::debug;

use crate::llm_client::{CompletionService, LlmError};
use crate::models::job::{JobTable, Subset};
use crate::search::prompts::JOB_SEARCH_PROMPT_TEMPLATE;

const ANSWER_MARKER: &str = "ANSWER:";
const INDICES_MARKER: &str = "INDICES:";

/// How many jobs to show when the model ignores the response format.
pub const UNSTRUCTURED_LIMIT: usize = 10;
pub const UNSTRUCTURED_ANSWER: &str = "I found some relevant jobs for you:";

/// Which rows the model picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    /// Valid, de-duplicated positions in order of appearance. May be empty.
    Indices(Vec<usize>),
}

/// Result of reading a completion against the expected two-field format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCompletion {
    Structured { answer: String, selection: Selection },
    /// One or both markers were missing.
    Unstructured,
}

/// Reads `ANSWER: <text>` / `INDICES: <list|all>` out of free model text.
///
/// Index tokens must be plain ASCII digits below `table_len`; anything else
/// (brackets, negatives, out-of-range values, repeats) is dropped silently.
pub fn parse_completion(text: &str, table_len: usize) -> ParsedCompletion {
    let (Some(answer_at), Some(indices_at)) = (text.find(ANSWER_MARKER), text.find(INDICES_MARKER)) else {
        return ParsedCompletion::Unstructured;
    };

    let after_answer = &text[answer_at + ANSWER_MARKER.len()..];
    let answer = after_answer
        .split(INDICES_MARKER)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let after_indices = &text[indices_at + INDICES_MARKER.len()..];
    let indices_text = after_indices
        .split(INDICES_MARKER)
        .next()
        .unwrap_or_default()
        .trim();

    let selection = if indices_text.eq_ignore_ascii_case("all") {
        Selection::All
    } else {
        Selection::Indices(parse_indices(indices_text, table_len))
    };

    ParsedCompletion::Structured { answer, selection }
}

fn parse_indices(indices_text: &str, table_len: usize) -> Vec<usize> {
    let mut seen = HashSet::new();
    indices_text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|&index| index < table_len)
        .filter(|&index| seen.insert(index))
        .collect()
}

/// The resolver's answer for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResolution<'a> {
    /// The model's own wording. Logged, never shown.
    pub answer: String,
    pub subset: Subset<'a>,
}

impl ParsedCompletion {
    /// Maps the parsed reply onto table references.
    pub fn into_resolution(self, table: &JobTable) -> LlmResolution<'_> {
        match self {
            ParsedCompletion::Unstructured => LlmResolution {
                answer: UNSTRUCTURED_ANSWER.to_string(),
                subset: table.head(UNSTRUCTURED_LIMIT),
            },
            ParsedCompletion::Structured { answer, selection } => {
                let subset = match selection {
                    Selection::All => table.all(),
                    Selection::Indices(indices) => {
                        Subset::new(indices.into_iter().filter_map(|i| table.get(i)).collect())
                    }
                };
                LlmResolution { answer, subset }
            }
        }
    }
}

/// Serializes every job as a labeled block, numbered by table position.
pub fn build_jobs_context(table: &JobTable) -> String {
    let mut context = String::new();
    for (i, job) in table.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(
            context,
            "\nJob {i}:\n- Title: {}\n- Organization: {}\n- Category: {}\n- Location: {}\n- Salary: {}\n- Experience: {}\n- Qualification: {}\n- Last Date: {}\n---\n",
            job.title,
            job.organization,
            job.category,
            job.location,
            job.salary,
            job.experience,
            job.qualification,
            job.last_date,
        );
    }
    context
}

/// Fills the template in one pass so neither the query nor the dataset text is
/// ever re-scanned for placeholders.
pub fn build_prompt(query: &str, table: &JobTable) -> String {
    let (head, tail) = JOB_SEARCH_PROMPT_TEMPLATE
        .split_once("{jobs_context}")
        .unwrap_or((JOB_SEARCH_PROMPT_TEMPLATE, ""));

    let mut prompt = head.replace("{query}", query);
    prompt.push_str(&build_jobs_context(table));
    prompt.push_str(tail);
    prompt
}

#[derive(Clone)]
pub struct LlmResolver {
    service: Arc<dyn CompletionService>,
}

impl LlmResolver {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    pub async fn resolve<'a>(&self, query: &str, table: &'a JobTable) -> Result<LlmResolution<'a>, LlmError> {
        let prompt = build_prompt(query, table);
        let text = self.service.complete(&prompt).await?;
        debug!("LLM analysis: {text}");

        let resolution = parse_completion(&text, table.len()).into_resolution(table);
        debug!(
            "LLM resolution: {} jobs, answer: {}",
            resolution.subset.len(),
            resolution.answer
        );
        Ok(resolution)
    }
}
