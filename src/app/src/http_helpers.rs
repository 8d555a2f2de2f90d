//! HTTP helper functions for Crux Core
//!
//! Common response handling for the registry endpoints: status checks,
//! JSON parsing and error classification.

use crux_http::Response;

use crate::types::{ApiError, ApiMessage};

/// Base URL for registry API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` (v0.16.0-rc2) requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// making them relative so they land on the host which forwards to the registry.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use gateway_ui_core::http_helpers::build_url;
/// let url = build_url("/getalldata");
/// assert_eq!(url, "https://relative/getalldata");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Classify a non-2xx response into an [`ApiError`].
///
/// The registry answers rejections with a `{message}` body; 400-422 become
/// Validation errors carrying that message, everything else a Server error.
pub fn response_error(action: &str, response: &mut Response<Vec<u8>>) -> ApiError {
    let status: u16 = response.status().into();

    let message = match response.take_body() {
        Some(body) if !body.is_empty() => match serde_json::from_slice::<ApiMessage>(&body) {
            Ok(reply) if !reply.message.is_empty() => reply.message,
            _ => match String::from_utf8(body) {
                Ok(text) => text,
                Err(_) => format!("{action} failed: HTTP {status}"),
            },
        },
        _ => format!("{action} failed: HTTP {status}"),
    };

    if (400..=422).contains(&status) {
        ApiError::Validation { message }
    } else {
        ApiError::Server { status, message }
    }
}

/// Parse JSON from response body.
///
/// Returns an error if the response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, ApiError> {
    if !is_response_success(response) {
        return Err(response_error(action, response));
    }

    match response.take_body() {
        Some(body) => serde_json::from_slice(&body).map_err(|e| ApiError::Network {
            message: format!("{action}: JSON parse error: {e}"),
        }),
        None => Err(ApiError::Network {
            message: format!("{action}: Empty response body"),
        }),
    }
}

/// Check response status only (no body parsing).
///
/// For endpoints where the success body is not needed.
pub fn check_response_status(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<(), ApiError> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(response_error(action, response))
    }
}

/// Map a transport-level failure into an [`ApiError`].
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> ApiError {
    ApiError::Network {
        message: format!("{action} failed: {error}"),
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), ApiError> {
    match result {
        Ok(mut response) => check_response_status(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ApiError> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Handle request creation error - sets error message and returns render command
///
/// This is used when building an HTTP request fails (e.g., JSON serialization error).
pub fn handle_request_error<M, E>(
    model: &mut M,
    action: &str,
    error: impl std::fmt::Display,
) -> crux_core::Command<crate::Effect, E>
where
    M: crate::model::ModelErrorHandler,
    E: Send + 'static,
{
    model.set_error(format!("Failed to create {action} request: {error}"));
    crux_core::render::render()
}

// Note: Unit tests for the response helpers are not included because
// crux_http::Response has a private constructor. These functions are covered
// through the update handlers that use them.
