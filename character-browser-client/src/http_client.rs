//! HTTP transport helpers
//!
//! Sending the request, mapping transport failures, logging. GraphQL
//! decoding lives in [`crate::graphql`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Build a `reqwest` client with the given timeouts.
pub(crate) fn create_http_client(connect_timeout: Duration, request_timeout: Duration) -> Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| ClientError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// Map a `reqwest` send error onto [`ClientError`].
fn transport_error(e: &reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout {
            detail: e.to_string(),
        }
    } else {
        ClientError::NetworkError {
            detail: e.to_string(),
        }
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Any status is returned as-is; interpreting it is up to the caller
    /// because GraphQL servers put useful error bodies on 4xx responses.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `operation` - GraphQL operation name, for logging
    pub async fn execute_request(request_builder: RequestBuilder, operation: &str) -> Result<(u16, String)> {
        log::debug!("[graphql] POST {operation}");

        let response = request_builder.send().await.map_err(|e| {
            let err = transport_error(&e);
            log::warn!("[graphql] {operation} failed to send: {err}");
            err
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[graphql] {operation} response status: {status_code}");

        let response_text = response.text().await.map_err(|e| ClientError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[graphql] {operation} response body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }
}
