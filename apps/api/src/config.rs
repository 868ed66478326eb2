use anyhow::{Context, Result};

use crate::models::TemplateKey;

const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
    /// Used when a generation request names no template.
    pub default_template: TemplateKey,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            body_limit_bytes: match lookup("BODY_LIMIT_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("BODY_LIMIT_BYTES must be a byte count, got '{raw}'"))?,
                None => DEFAULT_BODY_LIMIT_BYTES,
            },
            default_template: lookup("DEFAULT_TEMPLATE")
                .map(|name| TemplateKey::from_name(&name))
                .unwrap_or_default(),
        })
    }
}
