//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and decoding responses.

use crate::shared::api_error::ApiError;
use crate::shared::config::ApiConfig;
use contracts::usecases::shared::BackendPayload;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured port for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Explicit `base_url` wins; otherwise derive it from the page location.
pub fn resolve_api_base(config: &ApiConfig) -> String {
    if config.base_url.is_empty() {
        api_base(config.port)
    } else {
        config.base_url.trim_end_matches('/').to_string()
    }
}

/// Join a base URL, an endpoint prefix and a percent-encoded file name.
///
/// # Example
/// ```ignore
/// let url = file_url("http://localhost:8000", "/upload_status/", "Q1 report.pdf");
/// assert_eq!(url, "http://localhost:8000/upload_status/Q1%20report.pdf");
/// ```
pub fn file_url(base: &str, prefix: &str, file_name: &str) -> String {
    format!("{}{}{}", base, prefix, urlencoding::encode(file_name))
}

/// Turn a raw response into data, honoring the "text body means error" contract.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if status != 200 {
        return Err(ApiError::Status(status));
    }
    let payload: BackendPayload<T> = serde_json::from_str(body)?;
    payload.into_result().map_err(ApiError::Backend)
}
