use anyhow::{Context, Result};

use crate::credits::FREE_CREDITS;
use crate::llm_client::ProviderKind;

/// Application configuration loaded from environment variables.
///
/// Provider API keys are optional: a missing credential is a call-time
/// provider-unavailable condition, not a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ai_provider: ProviderKind,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub credits_path: String,
    pub free_credits: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider_raw = std::env::var("AI_PROVIDER").unwrap_or_else(|_| "openai".to_string());
        let ai_provider = ProviderKind::parse(&provider_raw).with_context(|| {
            format!("AI_PROVIDER must be 'openai' or 'gemini', got '{provider_raw}'")
        })?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ai_provider,
            openai_api_key: optional_env("OPENAI_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            credits_path: std::env::var("CREDITS_PATH")
                .unwrap_or_else(|_| "herald-credits.json".to_string()),
            free_credits: match std::env::var("FREE_CREDITS") {
                Ok(raw) => raw
                    .parse::<u32>()
                    .context("FREE_CREDITS must be a non-negative integer")?,
                Err(_) => FREE_CREDITS,
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
