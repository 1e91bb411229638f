//! Public key discovery.
//!
//! Looks up the key secrets must be sealed to, trying the repository first
//! and falling back to its organization.

use tracing::{debug, info};

use crate::core::domain::{PublicKeyInfo, Resource, Scope};
use crate::core::remote::{Lookup, SecretStore};
use crate::error::DiscoveryError;

/// Resolve the public key for `resource`.
///
/// # Errors
///
/// Returns `DiscoveryError::KeyNotFound` if neither scope has a key,
/// `DiscoveryError::Remote` on any other non-success status, and
/// `DiscoveryError::Transport` if no response was received.
pub async fn discover<S>(store: &S, resource: &Resource) -> Result<PublicKeyInfo, DiscoveryError>
where
    S: SecretStore + ?Sized,
{
    for scope in [Scope::Resource, Scope::Organization] {
        let lookup = store
            .public_key(resource, scope)
            .await
            .map_err(|e| DiscoveryError::Transport(e.to_string()))?;

        match lookup {
            Lookup::Found(key) => {
                info!(%resource, %scope, key_id = %key.key_id, "public key found");
                return Ok(PublicKeyInfo {
                    public_key: key.key,
                    key_id: key.key_id,
                    scope,
                });
            }
            Lookup::NotFound => debug!(%resource, %scope, "no public key at scope"),
            Lookup::Failed { status, body } => {
                return Err(DiscoveryError::Remote {
                    scope,
                    status,
                    body,
                })
            }
        }
    }

    Err(DiscoveryError::KeyNotFound {
        resource: resource.to_string(),
    })
}
