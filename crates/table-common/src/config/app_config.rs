//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub typing: TypingConfig,
    pub session: SessionConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Typing indicator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TypingConfig {
    /// Quiet period after the last keystroke before a participant stops typing.
    /// Also the delay before each reconciliation check runs.
    #[serde(default = "default_typing_delay_ms")]
    pub delay_ms: u64,
}

impl TypingConfig {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_typing_delay_ms(),
        }
    }
}

/// Session outbound channel configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Capacity of each session's outbound message queue
    #[serde(default = "default_outbound_buffer")]
    pub outbound_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            outbound_buffer: default_outbound_buffer(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "table-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_typing_delay_ms() -> u64 {
    2000
}

fn default_outbound_buffer() -> usize {
    64
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let delay_ms = match lookup("TYPING_DELAY_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) | Err(_) => return Err(ConfigError::InvalidValue("TYPING_DELAY_MS", raw)),
                Ok(ms) => ms,
            },
            None => default_typing_delay_ms(),
        };

        let outbound_buffer = match lookup("SESSION_OUTBOUND_BUFFER") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::InvalidValue("SESSION_OUTBOUND_BUFFER", raw))
                }
                Ok(n) => n,
            },
            None => default_outbound_buffer(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            typing: TypingConfig { delay_ms },
            session: SessionConfig { outbound_buffer },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
