// Query resolution: keyword filter chain, optional LLM resolver, reply composer.
// All completion-service calls go through llm_client.

pub mod composer;
pub mod filters;
pub mod llm_resolver;
pub mod pipeline;
pub mod prompts;
