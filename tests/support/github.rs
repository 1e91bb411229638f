//! Mock GitHub Actions secrets API.

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Answer the access probe for `owner/name` with `status`.
pub async fn mount_probe(server: &MockServer, resource: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}", resource)))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "full_name": resource })))
        .mount(server)
        .await;
}

/// Serve the repository public key.
pub async fn mount_repo_key(server: &MockServer, resource: &str, public_b64: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/actions/secrets/public-key", resource)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "key_id": super::KEY_ID, "key": public_b64 })),
        )
        .mount(server)
        .await;
}

/// Serve the organization public key.
pub async fn mount_org_key(server: &MockServer, org: &str, public_b64: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/orgs/{}/actions/secrets/public-key", org)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "key_id": super::KEY_ID, "key": public_b64 })),
        )
        .mount(server)
        .await;
}

/// Answer any public key lookup with 404.
pub async fn mount_no_keys(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"/actions/secrets/public-key$"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

/// Accept every secret write with 201.
pub async fn mount_accept_writes(server: &MockServer) {
    Mock::given(method("PUT"))
        .and(path_regex(r"/actions/secrets/[A-Za-z0-9_]+$"))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;
}

/// Reject writes of one secret with `status`. Mount before
/// [`mount_accept_writes`] so it takes priority.
pub async fn mount_reject_write(server: &MockServer, resource: &str, key: &str, status: u16) {
    Mock::given(method("PUT"))
        .and(path(format!("/repos/{}/actions/secrets/{}", resource, key)))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({ "message": "Validation Failed" })),
        )
        .mount(server)
        .await;
}

/// Secret writes the server received, as `(path, body)`.
pub async fn received_writes(server: &MockServer) -> Vec<(String, serde_json::Value)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r: &Request| r.method.as_str() == "PUT")
        .map(|r| {
            let body = r.body_json::<serde_json::Value>().expect("write body is JSON");
            (r.url.path().to_string(), body)
        })
        .collect()
}

/// Number of requests whose path ends with `suffix`.
pub async fn request_count(server: &MockServer, suffix: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path().ends_with(suffix))
        .count()
}
