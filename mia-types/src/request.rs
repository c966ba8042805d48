//! Request and response shapes passed across the transport port.

use serde_json::{Map, Value};

use crate::endpoint::Endpoint;
use crate::operation::HttpMethod;

/// JSON request body supplied by the caller.
pub type Payload = Map<String, Value>;

/// Query string parameters. Values must be scalars.
pub type Params = Map<String, Value>;

/// Everything a transport needs to send one request.
#[derive(Debug, Clone, Copy)]
pub struct ApiRequest<'a> {
    pub method: HttpMethod,
    pub endpoint: Endpoint,
    pub data: Option<&'a Payload>,
    pub params: Option<&'a Params>,
    pub token: &'a str,
    pub entity_id: Option<&'a str>,
}

/// A response whose body has been fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    ///
    /// An empty body decodes to `Null`; a body that is not JSON is kept as a string.
    pub fn json(&self) -> Value {
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}
