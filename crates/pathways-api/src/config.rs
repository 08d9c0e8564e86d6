//! Environment configuration.

use std::time::Duration;

use pathways_conversation::application::generation::DEFAULT_MODEL_ID;
use pathways_worqhat::WorqhatConfig;

use crate::error::AppError;

/// Server settings read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Model identifier sent with every content request.
    pub model_id: String,
    /// Connection settings for the generation services.
    pub worqhat: WorqhatConfig,
    /// How long a session may sit idle before it is evicted.
    pub session_idle_timeout: chrono::Duration,
    /// How often idle sessions are swept.
    pub sweep_interval: Duration,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns a variable's value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_key = lookup("WORQHAT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("WORQHAT_API_KEY environment variable must be set".into())
            })?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000_u16)?;
        let model_id = lookup("CONTENT_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let mut worqhat = WorqhatConfig::new(api_key);
        if let Some(url) = lookup("CONTENT_API_URL") {
            worqhat.content_url = url;
        }
        if let Some(url) = lookup("IMAGE_API_URL") {
            worqhat.image_url = url;
        }
        worqhat.timeout = Duration::from_secs(positive(&lookup, "COLLABORATOR_TIMEOUT_SECS", 120)?);

        let idle_secs = positive(&lookup, "SESSION_IDLE_TIMEOUT_SECS", 1800)?;
        let session_idle_timeout = i64::try_from(idle_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .ok_or_else(|| AppError::Config("SESSION_IDLE_TIMEOUT_SECS is too large".into()))?;
        let sweep_interval =
            Duration::from_secs(positive(&lookup, "SESSION_SWEEP_INTERVAL_SECS", 60)?);

        Ok(Self {
            host,
            port,
            model_id,
            worqhat,
            session_idle_timeout,
            sweep_interval,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid: {e}"))),
        None => Ok(default),
    }
}

fn positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<u64, AppError> {
    match parse_or(lookup, key, default)? {
        0 => Err(AppError::Config(format!("{key} must be greater than zero"))),
        value => Ok(value),
    }
}
