//! Error types.
//!
//! Run-fatal failures (input, config, resource access, key discovery) abort a
//! sync before any secret is written. Cipher and push failures are per-key and
//! only ever surface inside a [`SyncReport`](crate::core::domain::SyncReport).

use thiserror::Error;

use crate::core::domain::Scope;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("resource not found or not accessible: {resource}")]
    ResourceAccess { resource: String },

    #[error(transparent)]
    KeyDiscovery(#[from] DiscoveryError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("{failed} of {total} secrets failed to sync")]
    Incomplete { failed: usize, total: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unknown(String),
}

/// Missing or malformed caller input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no token provided (use --token, SEALENV_TOKEN or GITHUB_TOKEN)")]
    MissingToken,

    #[error("invalid resource '{resource}': {reason}")]
    InvalidResource { resource: String, reason: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read token: {0}")]
    Prompt(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Public key discovery failures.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("no public key found for {resource} at repository or organization scope")]
    KeyNotFound { resource: String },

    #[error("{scope} public key lookup failed with status {status}: {body}")]
    Remote {
        scope: Scope,
        status: u16,
        body: String,
    },

    #[error("public key lookup failed: {0}")]
    Transport(String),
}

/// Sealed box errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("cipher not ready: {0}")]
    NotReady(String),
}

/// Errors talking to the secret store.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Resource access failures get their own code so callers can tell a
    /// wrong target apart from a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Input(_) | Error::Config(_) => 2,
            Error::ResourceAccess { .. } => 3,
            Error::KeyDiscovery(_) => 4,
            _ => 1,
        }
    }

    /// Remediation hint shown under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Input(InputError::MissingToken) => Some("export SEALENV_TOKEN=<token>"),
            Error::Input(InputError::InvalidResource { .. }) => {
                Some("resources are written as owner/name")
            }
            Error::ResourceAccess { .. } => {
                Some("check the resource name and that the token can read it")
            }
            Error::KeyDiscovery(DiscoveryError::KeyNotFound { .. }) => {
                Some("the token needs secrets access on the repository or its organization")
            }
            Error::Incomplete { .. } => Some("re-run with only the failed keys to retry them"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
