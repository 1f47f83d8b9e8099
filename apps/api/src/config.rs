use anyhow::{Context, Result};

use crate::llm_client::GROQ_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub port: u16,
    pub form_port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_api_url: std::env::var("GROQ_API_URL")
                .unwrap_or_else(|_| GROQ_API_URL.to_string()),
            port: port_from_env("PORT", 8000)?,
            form_port: port_from_env("FORM_PORT", 8501)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn port_from_env(key: &str, default: u16) -> Result<u16> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("{key} must be a valid port number")),
        Err(_) => Ok(default),
    }
}
