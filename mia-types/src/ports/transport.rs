//! Transport port.
//!
//! Implementations own the base URL and the wire details: headers, body
//! serialization, query strings. They can be HTTP clients, mocks, etc.

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::{MiaError, TransportError};
use crate::request::{ApiRequest, RawResponse};

/// Port trait for sending MIA requests.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return its fully-read response.
    ///
    /// Fails only when no response was obtained (connection, timeout,
    /// serialization, bad URL). Non-2xx statuses are NOT errors here.
    async fn send(&self, request: ApiRequest<'_>) -> Result<RawResponse, TransportError>;

    /// Map a raw response to the decoded success value or an API error.
    fn handle_response(&self, response: RawResponse, endpoint: Endpoint) -> Result<Value, MiaError> {
        handle_raw_response(response, endpoint)
    }
}

/// Default response mapping shared by all transports.
pub fn handle_raw_response(response: RawResponse, endpoint: Endpoint) -> Result<Value, MiaError> {
    let body = response.json();
    if response.is_success() {
        Ok(body)
    } else {
        Err(MiaError::Api {
            status: response.status,
            endpoint,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_body() {
        let value =
            handle_raw_response(RawResponse::new(200, r#"{"ok":true}"#), Endpoint::Qr).unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn test_empty_success_is_null() {
        let value = handle_raw_response(RawResponse::new(204, ""), Endpoint::QrId).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_error_preserves_status_and_body() {
        let err = handle_raw_response(
            RawResponse::new(400, r#"{"errors":{"header":["required"]}}"#),
            Endpoint::Qr,
        )
        .unwrap_err();

        match err {
            MiaError::Api {
                status,
                endpoint,
                body,
            } => {
                assert_eq!(status, 400);
                assert_eq!(endpoint, Endpoint::Qr);
                assert_eq!(body, json!({"errors": {"header": ["required"]}}));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
