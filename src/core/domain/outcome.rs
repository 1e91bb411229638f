//! Result of writing one secret.

use crate::core::types::SecretName;

/// Outcome of a single secret write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    /// Secret name
    pub key: SecretName,
    /// Whether the store created (201) or updated (204) the secret
    pub accepted: bool,
    /// HTTP status, or 0 when no response was received
    pub status: u16,
    /// Reason phrase for `status`
    pub status_text: String,
    /// Response body, or the transport error message
    pub body: Option<String>,
}

impl PushOutcome {
    /// Short diagnostic used in failure reports.
    pub fn reason(&self) -> String {
        match self.body.as_deref().map(str::trim) {
            Some(body) if !body.is_empty() => {
                format!("{} {}: {}", self.status, self.status_text, body)
            }
            _ => format!("{} {}", self.status, self.status_text),
        }
    }
}
