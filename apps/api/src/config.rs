use anyhow::{ensure, Context, Result};

use crate::agents::matcher::DEFAULT_MAX_RESULTS;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// How many agents a recommendation list holds when the caller does not say.
    pub agent_max_results: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let agent_max_results = match std::env::var("AGENT_MAX_RESULTS") {
            Ok(v) => v
                .parse::<usize>()
                .context("AGENT_MAX_RESULTS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_RESULTS,
        };
        ensure!(
            agent_max_results >= 1,
            "AGENT_MAX_RESULTS must be at least 1"
        );

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            agent_max_results,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
