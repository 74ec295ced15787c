// Prompt constants for the LLM resolver.

/// Resolver prompt template. Replace `{query}` and `{jobs_context}` before sending.
///
/// The response format block must stay in sync with `llm_resolver::parse_completion`.
pub const JOB_SEARCH_PROMPT_TEMPLATE: &str = r#"USER QUERY: "{query}"

JOB DATABASE:
{jobs_context}

INSTRUCTIONS:
1. Understand the user's intent using NLP
2. Find the most relevant job indices (0-based) from the database
3. Return a natural, helpful response with emojis and friendly tone
4. Always include matching indices
5. Pay special attention to experience requirements, qualifications, categories, and locations

RESPONSE FORMAT:
ANSWER: [Your natural language response with emojis here]
INDICES: [comma-separated numbers or "all"]"#;
