//! Configuration file management.
//!
//! Handles reading and validating `.sealenv.toml` run settings and layering
//! command-line and environment overrides on top of them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::core::remote::RetryPolicy;
use crate::error::{ConfigError, Result};

/// Configuration stored in `.sealenv.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Run settings
    #[serde(default)]
    pub sealenv: Settings,
}

/// Run-level settings for talking to the secret store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// REST API base URL
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for transient failures
    pub max_retries: u32,
    /// Base retry delay in milliseconds, doubled per retry
    pub backoff_ms: u64,
    /// Secrets pushed concurrently
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            max_retries: constants::DEFAULT_MAX_RETRIES,
            backoff_ms: constants::DEFAULT_BACKOFF_MS,
            concurrency: constants::DEFAULT_CONCURRENCY,
        }
    }
}

/// Values given on the command line or through the environment.
///
/// `None` leaves the configured value untouched.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub concurrency: Option<usize>,
}

impl Settings {
    /// Apply overrides and re-validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the merged settings are invalid.
    pub fn apply(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(api_url) = overrides.api_url {
            self.api_url = api_url;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = overrides.max_retries {
            self.max_retries = max_retries;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.concurrency = concurrency;
        }
        self.validate()?;
        Ok(self)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Retry policy for remote calls
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff: Duration::from_millis(self.backoff_ms),
        }
    }

    /// Validate the settings
    ///
    /// Checks:
    /// - `api_url` is an http(s) URL
    /// - `timeout_secs` is positive
    /// - `concurrency` is between 1 and the supported maximum
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: format!("expected an http(s) URL, got '{}'", self.api_url),
            }
            .into());
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.concurrency == 0 || self.concurrency > constants::MAX_CONCURRENCY {
            return Err(ConfigError::InvalidValue {
                field: "concurrency",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    constants::MAX_CONCURRENCY,
                    self.concurrency
                ),
            }
            .into());
        }

        Ok(())
    }
}

impl Config {
    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or
    /// `ConfigError::InvalidValue` if a setting is out of range.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.sealenv.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read, or any
    /// error from [`Config::from_toml`].
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::from_toml(&contents)?;
        debug!(settings = ?config.sealenv, "config loaded");
        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// Lookup order: `explicit`, then `.sealenv.toml` in `cwd`, then the
    /// global config file.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is unreadable or any found file
    /// is invalid.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::discover(cwd) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// First existing config file for `cwd`, if any.
    pub fn discover(cwd: &Path) -> Option<PathBuf> {
        let local = cwd.join(constants::CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        Self::global_path().filter(|p| p.is_file())
    }

    /// Path of the global config file
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| {
            d.join(constants::CONFIG_DIR)
                .join(constants::GLOBAL_CONFIG_FILE)
        })
    }
}
