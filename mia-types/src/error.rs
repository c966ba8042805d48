//! Error types for the MIA client.

use serde_json::Value;

use crate::endpoint::{Endpoint, EndpointError};
use crate::operation::HttpMethod;

/// Transport-level failures (the request never produced a response).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl From<EndpointError> for TransportError {
    fn from(err: EndpointError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}

/// The single domain error returned by every MIA operation.
#[derive(Debug, thiserror::Error)]
pub enum MiaError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Missing ID.")]
    MissingId,

    #[error("Access token is not valid. It should be a non-empty string.")]
    InvalidAccessToken,

    #[error("HTTP error while sending {method} request to endpoint {endpoint}: {source}")]
    Transport {
        method: HttpMethod,
        endpoint: Endpoint,
        #[source]
        source: TransportError,
    },

    #[error("HTTP error {status} from endpoint {endpoint}: {body}")]
    Api {
        status: u16,
        endpoint: Endpoint,
        body: Value,
    },
}

impl MiaError {
    /// HTTP status of a non-success response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            MiaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded error body of a non-success response, if this error carries one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            MiaError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True for errors raised by local validation, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MiaError::MissingParameter(_) | MiaError::MissingId | MiaError::InvalidAccessToken
        )
    }
}
