//! Environment-driven configuration.
//!
//! | Variable                  | Default                                          |
//! |---------------------------|--------------------------------------------------|
//! | `OPENROUTER_API_KEY`      | required                                         |
//! | `COMPLETION_API_URL`      | `https://openrouter.ai/api/v1/chat/completions`  |
//! | `COMPLETION_MODEL`        | `anthropic/claude-3.5-sonnet`                    |
//! | `COMPLETION_TEMPERATURE`  | `0.7`                                            |
//! | `COMPLETION_TIMEOUT_SECS` | `120`                                            |
//! | `APP_URL`                 | `http://localhost:3000`                          |
//! | `BIND_ADDR`               | `127.0.0.1:8080`                                 |
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_REFERER: &str = "http://localhost:3000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for the chat-completion endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    /// Upper bound for one request, and for one content stream.
    pub timeout: Duration,
    /// Sent as `HTTP-Referer`.
    pub referer: String,
}

impl CompletionSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub completion: CompletionSettings,
    pub bind_addr: String,
}

impl Config {
    /// Read the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get("OPENROUTER_API_KEY").ok_or(ConfigError::Missing("OPENROUTER_API_KEY"))?;
        let mut completion = CompletionSettings::new(api_key);

        if let Some(url) = get("COMPLETION_API_URL") {
            completion.api_url = url;
        }
        if let Some(model) = get("COMPLETION_MODEL") {
            completion.model = model;
        }
        if let Some(value) = get("COMPLETION_TEMPERATURE") {
            completion.temperature = parse_temperature(value)?;
        }
        if let Some(value) = get("COMPLETION_TIMEOUT_SECS") {
            completion.timeout = Duration::from_secs(parse_timeout(value)?);
        }
        if let Some(referer) = get("APP_URL") {
            completion.referer = referer;
        }

        Ok(Self {
            completion,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn parse_temperature(value: String) -> Result<f32, ConfigError> {
    match value.parse::<f32>() {
        Ok(t) if (0.0..=2.0).contains(&t) => Ok(t),
        Ok(_) => Err(ConfigError::Invalid {
            key: "COMPLETION_TEMPERATURE",
            value,
            reason: "must be between 0 and 2".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            key: "COMPLETION_TEMPERATURE",
            value,
            reason: e.to_string(),
        }),
    }
}

fn parse_timeout(value: String) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            key: "COMPLETION_TIMEOUT_SECS",
            value,
            reason: "must be positive".to_string(),
        }),
        Ok(secs) => Ok(secs),
        Err(e) => Err(ConfigError::Invalid {
            key: "COMPLETION_TIMEOUT_SECS",
            value,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("OPENROUTER_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.completion.api_key, "sk-test");
        assert_eq!(config.completion.api_url, DEFAULT_API_URL);
        assert_eq!(config.completion.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(config.completion.temperature, 0.7);
        assert_eq!(config.completion.timeout, Duration::from_secs(120));
        assert_eq!(config.completion.referer, "http://localhost:3000");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_api_key_is_required() {
        assert_eq!(
            config(&[("OPENROUTER_API_KEY", "  ")]),
            Err(ConfigError::Missing("OPENROUTER_API_KEY"))
        );
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("OPENROUTER_API_KEY", "k"),
            ("COMPLETION_MODEL", "openai/gpt-4o"),
            ("COMPLETION_TEMPERATURE", "0.2"),
            ("COMPLETION_TIMEOUT_SECS", "30"),
            ("APP_URL", "https://launch.example"),
            ("BIND_ADDR", "0.0.0.0:9000"),
        ])
        .unwrap();
        assert_eq!(config.completion.model, "openai/gpt-4o");
        assert_eq!(config.completion.temperature, 0.2);
        assert_eq!(config.completion.timeout, Duration::from_secs(30));
        assert_eq!(config.completion.referer, "https://launch.example");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_invalid_numbers() {
        let err = config(&[("OPENROUTER_API_KEY", "k"), ("COMPLETION_TIMEOUT_SECS", "soon")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "COMPLETION_TIMEOUT_SECS", .. }));

        let err = config(&[("OPENROUTER_API_KEY", "k"), ("COMPLETION_TEMPERATURE", "5")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "COMPLETION_TEMPERATURE", .. }));

        let err = config(&[("OPENROUTER_API_KEY", "k"), ("COMPLETION_TIMEOUT_SECS", "0")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "COMPLETION_TIMEOUT_SECS", .. }));
    }
}
