//! Shared HTTP request handling for the Riot client.
//!
//! One code path for sending requests, logging, and reading responses.
//! Status-to-error mapping that depends on the endpoint (404 semantics)
//! stays with the caller.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::RiotError;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the HTTP client with bounded timeouts.
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

/// Send a request and return `(status, body)`.
///
/// Transport failures map to `NetworkError`/`Timeout`; HTTP 429 maps to
/// `RateLimited` here because its handling is endpoint-independent. All
/// other statuses are returned to the caller for mapping.
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    endpoint: &str,
) -> Result<(u16, String), RiotError> {
    log::debug!("[riot] GET {endpoint}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            RiotError::Timeout {
                detail: e.to_string(),
            }
        } else {
            RiotError::NetworkError {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[riot] Response Status: {status}");

    // Extract Retry-After before consuming the body
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let body = response.text().await.map_err(|e| RiotError::NetworkError {
        detail: format!("Failed to read response body: {e}"),
    })?;

    if status == 429 {
        log::warn!("[riot] Rate limited (HTTP 429), retry_after={retry_after:?}");
        return Err(RiotError::RateLimited {
            retry_after,
            raw_message: Some(body),
        });
    }

    Ok((status, body))
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T>(body: &str) -> Result<T, RiotError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("[riot] JSON parse failed: {e}");
        RiotError::ParseError {
            detail: e.to_string(),
        }
    })
}
