use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::job::{JobRecord, JobTable};

/// Loads the job dataset (a JSON array of postings) into memory.
///
/// The service cannot answer anything without it, so every failure here is
/// returned to `main` and aborts startup.
pub fn load_jobs(path: impl AsRef<Path>) -> Result<JobTable> {
    let path = path.as_ref();
    info!("Loading job dataset from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job dataset '{}'", path.display()))?;

    let records: Vec<JobRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Job dataset '{}' is not a JSON array of jobs", path.display()))?;

    info!("Loaded {} jobs", records.len());
    Ok(JobTable::new(records))
}
