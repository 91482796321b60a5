//! ==============================================================================
//! api.rs - HTTP client for the link service
//! ==============================================================================
//!
//! purpose:
//!     the one network call this page makes: POST the raw url to the
//!     shorten endpoint and decode the json answer. the endpoint comes in
//!     from the page config (see config.rs), so the hosting page can point
//!     the client at another deployment.
//!
//! ==============================================================================

use gloo_net::http::Request;
use shared::{SubmitRequest, SubmitResponse};

/// submit a raw url for shortening.
///
/// the service expects a form-encoded body with a single `url` field and
/// answers with json carrying the assigned suffix. network errors and
/// malformed responses both surface as the same stringly error - the page
/// has exactly one failure path.
pub async fn submit_link(endpoint: &str, raw_url: &str) -> Result<SubmitResponse, String> {
    let body = SubmitRequest::new(raw_url);

    Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body.to_form_body())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<SubmitResponse>()
        .await
        .map_err(|e| e.to_string())
}
