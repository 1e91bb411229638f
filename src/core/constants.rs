//! Constants used throughout sealenv.
//!
//! Centralizes magic strings and configuration defaults.

/// Project configuration file name (.sealenv.toml).
pub const CONFIG_FILE: &str = ".sealenv.toml";

/// Directory under the user config dir holding the global config.
pub const CONFIG_DIR: &str = "sealenv";

/// Global configuration file name inside [`CONFIG_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Pinned GitHub REST API version header value.
pub const API_VERSION: &str = "2022-11-28";

/// Accept header for GitHub REST calls.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Environment variable holding the write credential.
pub const TOKEN_ENV: &str = "SEALENV_TOKEN";

/// Fallback credential variable, as set by GitHub Actions runners.
pub const FALLBACK_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Log filter environment variable.
pub const LOG_ENV: &str = "SEALENV_LOG";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Default base delay between retries in milliseconds.
pub const DEFAULT_BACKOFF_MS: u64 = 500;

/// Default number of secrets pushed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Upper bound on concurrent pushes.
pub const MAX_CONCURRENCY: usize = 32;

/// HTTP statuses worth retrying.
pub const TRANSIENT_STATUSES: &[u16] = &[429, 500, 502, 503, 504];
