//! Acquirer configuration: TOML parsing with defaults for every field.
//!
//! The file is optional for callers; [`AcquirerConfig::default`] gives the
//! same values an empty file would. Credentials never live in this file, only
//! the *name* of the environment variable that holds the API key.
//!
//! ```toml
//! base_url = "https://www.alphavantage.co/query"
//! timeout_secs = 60
//! api_key_env = "ALPHAVANTAGE_API_KEY"
//! ```

use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`AcquirerConfig`].
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    /// A value parsed but is unusable.
    #[error("Invalid config value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Settings for talking to the market-data provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AcquirerConfig {
    /// Provider query endpoint.
    pub base_url: String,
    /// Overall timeout for one provider round trip.
    pub timeout_secs: u64,
    /// Name of the environment variable holding the provider API key.
    pub api_key_env: String,
}

impl Default for AcquirerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl AcquirerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "base_url",
                message: "must not be empty".into(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                message: "must be greater than zero".into(),
            });
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_key_env",
                message: "must not be empty".into(),
            });
        }
        Ok(self)
    }
}

/// Parse and validate a config from a TOML string.
pub fn parse_config(s: &str, origin: &str) -> Result<AcquirerConfig, ConfigError> {
    let cfg: AcquirerConfig = toml::from_str(s).map_err(|source| ConfigError::Parse {
        path: origin.to_string(),
        source,
    })?;
    cfg.validate()
}

/// Read, parse and validate a config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<AcquirerConfig, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    parse_config(&content, &display)
}
