//! Secret writes.

use tracing::{debug, warn};

use crate::core::domain::{PublicKeyInfo, PushOutcome, Resource};
use crate::core::remote::{SecretPayload, SecretStore};
use crate::core::types::Ciphertext;

/// Write one sealed secret to the endpoint matching `key_info.scope`.
///
/// Never fails: 201 and 204 are accepted, any other status or a missing
/// response is reported as a rejected outcome.
pub async fn push<S>(
    store: &S,
    resource: &Resource,
    key_info: &PublicKeyInfo,
    name: &str,
    ciphertext: Ciphertext,
) -> PushOutcome
where
    S: SecretStore + ?Sized,
{
    let payload = SecretPayload::new(ciphertext, key_info);

    match store
        .put_secret(resource, key_info.scope, name, &payload)
        .await
    {
        Ok(reply) => {
            let accepted = matches!(reply.status, 201 | 204);
            if accepted {
                debug!(key = name, status = reply.status, "secret written");
            } else {
                warn!(key = name, status = reply.status, "secret rejected");
            }
            PushOutcome {
                key: name.to_string(),
                accepted,
                status: reply.status,
                status_text: reply.status_text,
                body: reply.body,
            }
        }
        Err(e) => {
            warn!(key = name, error = %e, "secret write failed");
            PushOutcome {
                key: name.to_string(),
                accepted: false,
                status: 0,
                status_text: "No Response".to_string(),
                body: Some(e.to_string()),
            }
        }
    }
}
