// Agent recommendations: static catalog plus the deterministic matcher.
// Judgments come from the market evaluation; the matcher itself never calls the LLM.

pub mod catalog;
pub mod handlers;
pub mod matcher;
