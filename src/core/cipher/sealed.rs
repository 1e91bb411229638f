//! Sealed box backend implementation.
//!
//! Seals plaintext to a Curve25519 public key with a fresh ephemeral key
//! pair per call and encodes the result as standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use tracing::{debug, trace};

use super::Cipher;
use crate::error::{CipherError, Result};

const PROBE: &[u8] = b"sealenv-ready";

/// Handle to a ready sealed box primitive.
///
/// Obtained once per run from [`SealedBox::init`] and shared by every
/// encryption in that run.
#[derive(Debug, Clone, Copy)]
pub struct SealedBox {
    _ready: (),
}

impl SealedBox {
    /// Check the primitive works and return a handle to it.
    ///
    /// Seals and opens a probe message with a throwaway key pair, which
    /// exercises the OS random number generator.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NotReady` if the round trip fails.
    pub fn init() -> Result<Self> {
        let secret = SecretKey::generate(&mut OsRng);
        let sealed = secret
            .public_key()
            .seal(&mut OsRng, PROBE)
            .map_err(|e| CipherError::NotReady(format!("{}", e)))?;
        let opened = secret
            .unseal(&sealed)
            .map_err(|e| CipherError::NotReady(format!("{}", e)))?;

        if opened != PROBE {
            return Err(CipherError::NotReady("probe mismatch".to_string()).into());
        }

        debug!("sealed box ready");
        Ok(Self { _ready: () })
    }
}

impl Cipher for SealedBox {
    type Recipient = PublicKey;

    fn name(&self) -> &'static str {
        "sealed-box"
    }

    fn encrypt(&self, plaintext: &str, recipient: &PublicKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let sealed = recipient
            .seal(&mut OsRng, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");
        Ok(STANDARD.encode(sealed))
    }
}

/// Parse a base64 public key into a sealed box recipient
///
/// # Errors
///
/// Returns `CipherError::InvalidPublicKey` if the key is not base64 of
/// exactly 32 bytes.
pub fn parse_recipient(key: &str) -> Result<PublicKey> {
    let bytes = STANDARD
        .decode(key.trim())
        .map_err(|e| CipherError::InvalidPublicKey(format!("invalid base64: {}", e)))?;

    let bytes: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
        CipherError::InvalidPublicKey(format!("expected 32 bytes, got {}", bytes.len()))
    })?;

    Ok(PublicKey::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypair() -> (SecretKey, String) {
        let secret = SecretKey::generate(&mut OsRng);
        let public = STANDARD.encode(secret.public_key().as_bytes());
        (secret, public)
    }

    fn open(secret: &SecretKey, ciphertext: &str) -> String {
        let bytes = STANDARD.decode(ciphertext).unwrap();
        String::from_utf8(secret.unseal(&bytes).unwrap()).unwrap()
    }

    #[test]
    fn test_init_succeeds() {
        assert!(SealedBox::init().is_ok());
    }

    #[test]
    fn test_recipient_can_open() {
        let sealer = SealedBox::init().unwrap();
        let (secret, public) = keypair();

        let ciphertext = crate::core::cipher::encrypt(&sealer, "Hello, World!", &public).unwrap();

        assert_ne!(ciphertext, "Hello, World!");
        assert_eq!(open(&secret, &ciphertext), "Hello, World!");
    }

    #[test]
    fn test_ciphertext_is_randomized() {
        let sealer = SealedBox::init().unwrap();
        let (secret, public) = keypair();
        let recipient = parse_recipient(&public).unwrap();

        let first = sealer.encrypt("same", &recipient).unwrap();
        let second = sealer.encrypt("same", &recipient).unwrap();

        assert_ne!(first, second);
        assert_eq!(open(&secret, &first), "same");
        assert_eq!(open(&secret, &second), "same");
    }

    #[test]
    fn test_ciphertext_overhead() {
        let sealer = SealedBox::init().unwrap();
        let (_, public) = keypair();
        let recipient = parse_recipient(&public).unwrap();

        let ciphertext = sealer.encrypt("abc", &recipient).unwrap();
        // ephemeral public key (32) + tag (16) + plaintext
        assert_eq!(STANDARD.decode(ciphertext).unwrap().len(), 32 + 16 + 3);
    }

    #[test]
    fn test_multiline_and_unicode_payload() {
        let sealer = SealedBox::init().unwrap();
        let (secret, public) = keypair();

        let value = "-----BEGIN KEY-----\nこんにちは 🚀\n-----END KEY-----";
        let ciphertext = crate::core::cipher::encrypt(&sealer, value, &public).unwrap();
        assert_eq!(open(&secret, &ciphertext), value);
    }

    #[test]
    fn test_parse_recipient_rejects_bad_keys() {
        let err = parse_recipient("not base64!").unwrap_err();
        assert!(err.to_string().contains("invalid base64"));

        let short = STANDARD.encode([7u8; 16]);
        let err = parse_recipient(&short).unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes, got 16"));
    }

    #[test]
    fn test_name() {
        assert_eq!(SealedBox::init().unwrap().name(), "sealed-box");
    }
}
