//! HTTP client for the GitHub Actions secrets API.
//!
//! Provides [`GitHubClient`] which handles request construction,
//! authentication, per-request timeouts and transient error retry.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{Lookup, PublicKeyResponse, Reply, RetryPolicy, SecretPayload, SecretStore};
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{Resource, Scope};
use crate::error::{ConfigError, RemoteError, Result};

/// GitHub REST client bound to one credential.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl GitHubClient {
    /// Creates a client that authenticates every request with `token`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the token is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(token: &str, settings: &Settings) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(|_| {
            ConfigError::InvalidValue {
                field: "token",
                reason: "contains characters not allowed in a header".to_string(),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(constants::ACCEPT));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(constants::API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("sealenv/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            retry: settings.retry_policy(),
        })
    }

    fn scope_url(&self, resource: &Resource, scope: Scope) -> String {
        match scope {
            Scope::Resource => format!(
                "{}/repos/{}/{}",
                self.base_url,
                resource.owner(),
                resource.name()
            ),
            Scope::Organization => format!("{}/orgs/{}", self.base_url, resource.organization()),
        }
    }

    /// Sends a request, retrying transport errors and transient statuses.
    ///
    /// After the last attempt the final response or transport error is
    /// returned unchanged.
    async fn send<F>(&self, build: F) -> std::result::Result<Response, RemoteError>
    where
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        let mut attempt = 0;

        loop {
            match build().send().await {
                Ok(response) => {
                    let status = response.status();
                    debug!(status = %status, attempt, "response received");

                    if !RetryPolicy::is_transient(status.as_u16())
                        || attempt >= self.retry.max_retries
                    {
                        return Ok(response);
                    }
                    warn!(status = %status, attempt, "transient error, will retry");
                }
                Err(e) => {
                    if attempt >= self.retry.max_retries {
                        return Err(RemoteError::Transport(e.to_string()));
                    }
                    warn!(error = %e, attempt, "request failed, will retry");
                }
            }

            attempt += 1;
            tokio::time::sleep(self.retry.delay(attempt)).await;
        }
    }
}

/// Maps a read response onto a [`Lookup`], decoding the body on success.
async fn lookup<T: DeserializeOwned>(
    response: Response,
) -> std::result::Result<Lookup<T>, RemoteError> {
    let status = response.status();

    if status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let value = serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))?;
        return Ok(Lookup::Found(value));
    }

    if status == StatusCode::NOT_FOUND {
        return Ok(Lookup::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    Ok(Lookup::Failed {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl SecretStore for GitHubClient {
    async fn probe(&self, resource: &Resource) -> std::result::Result<Lookup<()>, RemoteError> {
        let url = self.scope_url(resource, Scope::Resource);
        debug!(%resource, "probing resource");

        let response = self.send(|| self.http.get(&url)).await?;
        let status = response.status();

        if status.is_success() {
            Ok(Lookup::Found(()))
        } else if status == StatusCode::NOT_FOUND {
            Ok(Lookup::NotFound)
        } else {
            Ok(Lookup::Failed {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }

    async fn public_key(
        &self,
        resource: &Resource,
        scope: Scope,
    ) -> std::result::Result<Lookup<PublicKeyResponse>, RemoteError> {
        let url = format!(
            "{}/actions/secrets/public-key",
            self.scope_url(resource, scope)
        );
        debug!(%resource, %scope, "fetching public key");

        let response = self.send(|| self.http.get(&url)).await?;
        lookup(response).await
    }

    async fn put_secret(
        &self,
        resource: &Resource,
        scope: Scope,
        name: &str,
        payload: &SecretPayload,
    ) -> std::result::Result<Reply, RemoteError> {
        let url = format!("{}/actions/secrets/{}", self.scope_url(resource, scope), name);
        debug!(%resource, %scope, key = name, "writing secret");

        let response = self.send(|| self.http.put(&url).json(payload)).await?;
        let status = response.status();
        let body = response.text().await.ok().filter(|b| !b.is_empty());

        Ok(Reply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}
