use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub fetch_timeout: Duration,
    pub fetch_max_bytes: usize,
    /// Empty = any public host.
    pub allowed_fetch_hosts: Vec<String>,
    /// Empty = permissive CORS.
    pub cors_allowed_origins: Vec<String>,
    pub max_concurrent_requests: usize,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            fetch_timeout: Duration::from_secs(env_or("FETCH_TIMEOUT_SECS", 10)?),
            fetch_max_bytes: env_or("FETCH_MAX_BYTES", 2 * 1024 * 1024)?,
            allowed_fetch_hosts: env_list("ALLOWED_FETCH_HOSTS"),
            cors_allowed_origins: env_list("CORS_ALLOWED_ORIGINS"),
            max_concurrent_requests: env_or("MAX_CONCURRENT_REQUESTS", 64)?,
            request_timeout: Duration::from_secs(env_or("REQUEST_TIMEOUT_SECS", 30)?),
            max_body_bytes: env_or("MAX_BODY_BYTES", 256 * 1024)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => parse_value(key, &raw),
        _ => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}

fn env_list(key: &str) -> Vec<String> {
    std::env::var(key)
        .map(|raw| split_list(&raw))
        .unwrap_or_default()
}

/// Comma-separated, trimmed, lowercased, empties dropped.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}
