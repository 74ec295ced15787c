//! Resolution pipeline: query in, (reply, jobs) out.
//!
//! Flow: LLM resolver (when configured) → on any error, keyword filter chain →
//!       response composer.
//!
//! Built once at startup from the loaded table and the optional completion
//! service; read-only afterwards.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::models::job::{JobTable, Subset};
use crate::search::composer::compose;
use crate::search::filters::KeywordFilterChain;
use crate::search::llm_resolver::LlmResolver;

/// Where a result subset came from. Internal bookkeeping, never shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Keyword,
    Llm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub reply: String,
    pub subset: Subset<'a>,
    pub source: ResolutionSource,
}

pub struct ResolutionPipeline {
    table: Arc<JobTable>,
    chain: KeywordFilterChain,
    llm: Option<LlmResolver>,
}

impl ResolutionPipeline {
    pub fn new(table: Arc<JobTable>, chain: KeywordFilterChain, llm: Option<LlmResolver>) -> Self {
        Self { table, chain, llm }
    }

    pub fn table(&self) -> &JobTable {
        &self.table
    }

    pub fn llm_enabled(&self) -> bool {
        self.llm.is_some()
    }

    pub async fn resolve(&self, query: &str) -> QueryResult<'_> {
        let result = match &self.llm {
            Some(llm) => match llm.resolve(query, &self.table).await {
                Ok(resolution) => QueryResult {
                    reply: compose(query, resolution.subset.len()),
                    subset: resolution.subset,
                    source: ResolutionSource::Llm,
                },
                Err(e) => {
                    warn!("LLM resolution failed, falling back to keyword search: {e}");
                    self.resolve_keywords(query)
                }
            },
            None => self.resolve_keywords(query),
        };

        info!(
            "Resolved query via {:?}: {} jobs",
            result.source,
            result.subset.len()
        );
        result
    }

    /// Keyword-only resolution. Also the fallback for every LLM failure.
    pub fn resolve_keywords(&self, query: &str) -> QueryResult<'_> {
        let subset = self.chain.resolve(query, &self.table);
        QueryResult {
            reply: compose(query, subset.len()),
            subset,
            source: ResolutionSource::Keyword,
        }
    }
}
