// Candidate and posting analysis: quick diagnosis, market evaluation,
// and position analysis. All LLM calls go through llm_client.

pub mod handlers;
pub mod market;
pub mod position;
pub mod prompts;
pub mod quick;
