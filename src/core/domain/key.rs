//! Public key discovery result.

use std::fmt;

use serde::Serialize;

use crate::core::types::{KeyId, PublicKey};

/// Level at which a public key and its secrets live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Repository-level secrets
    Resource,
    /// Organization-level secrets, visible to all repositories
    Organization,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Resource => write!(f, "repository"),
            Scope::Organization => write!(f, "organization"),
        }
    }
}

/// The recipient key secrets are sealed to for one run.
///
/// Resolved once and shared read-only by every per-key push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    /// Base64 Curve25519 public key
    pub public_key: PublicKey,
    /// Identifier echoed back on every write
    pub key_id: KeyId,
    /// Scope the key was found at
    pub scope: Scope,
}
