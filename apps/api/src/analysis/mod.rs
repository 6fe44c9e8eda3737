// D.E.E.P. profile analysis: prompt construction, one model call, JSON extraction.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
