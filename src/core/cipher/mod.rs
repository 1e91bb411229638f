//! Cryptographic operations.
//!
//! Secrets are sealed to the secret store's public key before they leave the
//! process. Only the store can open them; sealenv never decrypts.
//!
//! ## Backends
//!
//! - **sealed box**: libsodium-compatible `crypto_box_seal` (X25519 +
//!   XSalsa20-Poly1305 with an ephemeral sender key).
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

mod sealed;

pub use sealed::{parse_recipient, SealedBox};

/// One-way encryption backend.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Encrypt plaintext for a recipient.
    ///
    /// # Returns
    ///
    /// Encrypted string (format depends on backend implementation).
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &str, recipient: &Self::Recipient) -> Result<String>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// Seal `plaintext` to a base64-encoded public key.
///
/// Convenience wrapper that parses the recipient and calls
/// [`SealedBox::encrypt`]. The output is base64 and differs on every call.
///
/// # Errors
///
/// Returns `CipherError::InvalidPublicKey` if the key is not base64 of 32
/// bytes, or `CipherError::EncryptionFailed` if sealing fails.
pub fn encrypt(sealer: &SealedBox, plaintext: &str, public_key: &str) -> Result<String> {
    let recipient = parse_recipient(public_key)?;
    sealer.encrypt(plaintext, &recipient)
}
