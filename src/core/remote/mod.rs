//! Remote secret store.
//!
//! The store publishes a public key per scope and accepts sealed secret
//! writes. [`SecretStore`] is the seam the sync pipeline talks to;
//! [`GitHubClient`] implements it over the GitHub Actions secrets REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::domain::{PublicKeyInfo, Resource, Scope};
use crate::core::types::{Ciphertext, KeyId, PublicKey};
use crate::error::RemoteError;

mod client;
mod retry;

pub use client::GitHubClient;
pub use retry::RetryPolicy;

/// Tagged result of a read against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The store returned the item
    Found(T),
    /// The store answered 404
    NotFound,
    /// The store answered with any other non-success status
    Failed { status: u16, body: String },
}

/// Public key document returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKeyResponse {
    pub key_id: KeyId,
    pub key: PublicKey,
}

/// Visibility of an organization secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    All,
}

/// Body of a secret write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretPayload {
    pub encrypted_value: Ciphertext,
    pub key_id: KeyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl SecretPayload {
    /// Build the payload for `key_info`'s scope.
    ///
    /// Organization writes always carry `visibility: all`.
    pub fn new(encrypted_value: Ciphertext, key_info: &PublicKeyInfo) -> Self {
        let visibility = match key_info.scope {
            Scope::Resource => None,
            Scope::Organization => Some(Visibility::All),
        };
        Self {
            encrypted_value,
            key_id: key_info.key_id.clone(),
            visibility,
        }
    }
}

/// Raw answer to a secret write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub status_text: String,
    pub body: Option<String>,
}

/// Operations the sync pipeline needs from a secret store.
///
/// Implementations hold the credential; callers never see or mutate it.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Check that the resource exists and the credential can see it.
    async fn probe(&self, resource: &Resource) -> Result<Lookup<()>, RemoteError>;

    /// Fetch the public key for `resource` at `scope`.
    async fn public_key(
        &self,
        resource: &Resource,
        scope: Scope,
    ) -> Result<Lookup<PublicKeyResponse>, RemoteError>;

    /// Create or update one secret.
    async fn put_secret(
        &self,
        resource: &Resource,
        scope: Scope,
        name: &str,
        payload: &SecretPayload,
    ) -> Result<Reply, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_info(scope: Scope) -> PublicKeyInfo {
        PublicKeyInfo {
            public_key: "a2V5".into(),
            key_id: "568250167242549743".into(),
            scope,
        }
    }

    #[test]
    fn test_repository_payload_has_no_visibility() {
        let payload = SecretPayload::new("c2VhbGVk".into(), &key_info(Scope::Resource));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "encrypted_value": "c2VhbGVk",
                "key_id": "568250167242549743"
            })
        );
    }

    #[test]
    fn test_organization_payload_is_visible_to_all() {
        let payload = SecretPayload::new("c2VhbGVk".into(), &key_info(Scope::Organization));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "encrypted_value": "c2VhbGVk",
                "key_id": "568250167242549743",
                "visibility": "all"
            })
        );
    }
}
