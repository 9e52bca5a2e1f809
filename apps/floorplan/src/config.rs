use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; every variable has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent key puts the service in demo mode (fallback room list only).
    pub openai_api_key: Option<String>,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    /// Meters → SVG user units.
    pub default_scale: f64,
    pub max_row_width: f64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 20)?,
            default_scale: parse_env("DEFAULT_SCALE", 40.0)?,
            max_row_width: parse_env("MAX_ROW_WIDTH", 12.0)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            llm_model: "gpt-3.5-turbo".to_string(),
            llm_timeout_secs: 20,
            default_scale: 40.0,
            max_row_width: 12.0,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Treats an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
