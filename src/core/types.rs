//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name (e.g., DATABASE_URL, API_KEY).
///
/// Matches `[A-Za-z0-9_]+`.
pub type SecretName = String;

/// A sealed, base64-encoded secret value.
pub type Ciphertext = String;

/// A base64-encoded Curve25519 public key published by the secret store.
pub type PublicKey = String;

/// Identifier the secret store assigns to its current public key.
pub type KeyId = String;
