//! Test fixtures and constants.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::SecretKey;
use rand::rngs::OsRng;

/// Repository used across tests.
pub const RESOURCE: &str = "acme/api";

/// Key id the mock API hands out.
pub const KEY_ID: &str = "568250167242549743";

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/mydb"),
    ("API_KEY", "sk-test-12345"),
    ("JWT_SECRET", "super-secret-jwt-token"),
];

/// Sample .env with edge cases.
pub const SAMPLE_ENV_COMPLEX: &str = r#"
# This is a comment
SIMPLE=value
QUOTED="quoted value"
SINGLE_QUOTED='single quoted'
SPACES_IN_VALUE=hello world
CERT="-----BEGIN CERTIFICATE-----
MIIBszCCAVmgAwIBAgIUB
-----END CERTIFICATE-----"

not a valid line
# Another comment
SPECIAL_CHARS=p@ssw0rd!#$%
SIMPLE=overridden
"#;

/// Render pairs as .env text.
pub fn env_text(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}\n", k, v))
        .collect()
}

/// Recipient key pair standing in for the store's key.
pub struct Recipient {
    pub secret: SecretKey,
    pub public_b64: String,
}

impl Recipient {
    pub fn generate() -> Self {
        let secret = SecretKey::generate(&mut OsRng);
        let public_b64 = STANDARD.encode(secret.public_key().as_bytes());
        Self { secret, public_b64 }
    }

    /// Open a base64 sealed value.
    pub fn open(&self, encrypted_value: &str) -> String {
        let sealed = STANDARD.decode(encrypted_value).expect("invalid base64");
        let plain = self.secret.unseal(&sealed).expect("failed to open sealed box");
        String::from_utf8(plain).expect("plaintext is not UTF-8")
    }
}
