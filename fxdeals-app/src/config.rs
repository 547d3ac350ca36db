//! Configuration loading from environment.

use std::env;
use std::str::FromStr;

use fxdeals_hex::inbound::DEFAULT_MAX_BATCH_SIZE;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("LOG_FORMAT must be `pretty` or `json`, got `{}`", other),
        }
    }
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub max_batch_size: usize,
    pub log_format: LogFormat,
    /// Export spans over OTLP.
    pub otel_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT is not a valid port: {}", e))?;

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_batch_size = match lookup("MAX_BATCH_SIZE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("MAX_BATCH_SIZE is not a number: {}", e))?,
            None => DEFAULT_MAX_BATCH_SIZE,
        };
        if max_batch_size == 0 {
            anyhow::bail!("MAX_BATCH_SIZE must be at least 1");
        }

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Pretty,
        };

        let otel_enabled = lookup("OTEL_ENABLED")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            port,
            database_url,
            max_batch_size,
            log_format,
            otel_enabled,
        })
    }
}
