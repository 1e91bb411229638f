//! Secret synchronization.
//!
//! Drives one run: probe the resource, parse the input, discover the public
//! key, then seal and push every secret. Probe, input and discovery failures
//! abort the run. Per-secret failures are recorded in the [`SyncReport`] and
//! the remaining secrets are still attempted.

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::core::cipher::{self, Cipher, SealedBox};
use crate::core::domain::{PublicKeyInfo, PushOutcome, Resource, SyncReport};
use crate::core::remote::{Lookup, SecretStore};
use crate::core::{discovery, env, push};
use crate::error::{Error, RemoteError, Result};

/// Runs syncs against one secret store.
#[derive(Debug)]
pub struct Syncer<S> {
    store: S,
    concurrency: usize,
}

impl<S: SecretStore> Syncer<S> {
    /// Create a sequential syncer
    pub fn new(store: S) -> Self {
        Self {
            store,
            concurrency: 1,
        }
    }

    /// Push up to `concurrency` secrets at a time.
    ///
    /// Outcomes are still folded into the report in input order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sync every secret in `env_text` to `resource`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceAccess` if the probe reports not-found,
    /// `Error::KeyDiscovery` if no public key can be resolved,
    /// `Error::Cipher` if the sealed box cannot be initialized, and
    /// `Error::Remote` if the probe fails for any other reason. Per-secret
    /// failures never produce an error.
    pub async fn run(&self, resource: &Resource, env_text: &str) -> Result<SyncReport> {
        info!(%resource, "starting sync");

        match self.store.probe(resource).await? {
            Lookup::Found(()) => {}
            Lookup::NotFound => {
                return Err(Error::ResourceAccess {
                    resource: resource.to_string(),
                })
            }
            Lookup::Failed { status, body } => {
                return Err(RemoteError::UnexpectedStatus { status, body }.into())
            }
        }

        let secrets = env::parse(env_text);
        let key_info = discovery::discover(&self.store, resource).await?;
        let sealer = SealedBox::init()?;
        debug!(cipher = sealer.name(), keys = secrets.len(), "sealing secrets");

        let report = stream::iter(secrets.iter())
            .map(|(name, value)| self.sync_one(&sealer, resource, &key_info, name, value))
            .buffered(self.concurrency)
            .fold(SyncReport::new(), |mut report, (name, result)| async move {
                match result {
                    Ok(outcome) => report.record_outcome(outcome),
                    Err(e) => report.record_failure(name, e.to_string()),
                }
                report
            })
            .await;

        info!(
            %resource,
            succeeded = report.succeeded_keys().len(),
            failed = report.failures().len(),
            "sync finished"
        );
        Ok(report)
    }

    async fn sync_one(
        &self,
        sealer: &SealedBox,
        resource: &Resource,
        key_info: &PublicKeyInfo,
        name: &str,
        value: &str,
    ) -> (String, Result<PushOutcome>) {
        let ciphertext = match cipher::encrypt(sealer, value, &key_info.public_key) {
            Ok(ciphertext) => ciphertext,
            Err(e) => {
                warn!(key = name, error = %e, "failed to seal secret");
                return (name.to_string(), Err(e));
            }
        };

        let outcome = push::push(&self.store, resource, key_info, name, ciphertext).await;
        (name.to_string(), Ok(outcome))
    }
}
