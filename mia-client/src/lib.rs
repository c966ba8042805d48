//! # MIA Client
//!
//! reqwest-backed [`Transport`] for the Victoriabank MIA API.

mod config;

pub use config::ClientConfig;

use mia_types::{ApiRequest, HttpMethod, Params, RawResponse, Transport, TransportError};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, instrument};

/// HTTP transport for the MIA API.
///
/// Cheap to clone; the underlying reqwest client is shared.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    http: Client,
}

impl HttpTransport {
    /// Creates a new transport.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Creates a transport bound to `base_url` with default settings otherwise.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ClientConfig::default().with_base_url(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the absolute URL for a request.
    pub fn url_for(&self, request: &ApiRequest<'_>) -> Result<String, TransportError> {
        Ok(request.endpoint.resolve(
            &self.config.base_url,
            &self.config.demo_pay_url,
            request.entity_id,
        )?)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, endpoint = %request.endpoint))]
    async fn send(&self, request: ApiRequest<'_>) -> Result<RawResponse, TransportError> {
        let url = self.url_for(&request)?;
        debug!("Sending {} {}", request.method, url);

        let mut req = self
            .http
            .request(to_reqwest_method(request.method), &url)
            .bearer_auth(request.token);
        if let Some(params) = request.params {
            req = req.query(&query_pairs(params));
        }
        if let Some(data) = request.data {
            req = req.json(data);
        }
        if let Some(timeout) = self.config.timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await.map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(map_reqwest_error)?;

        debug!("Received {} from {}", status, url);
        Ok(RawResponse { status, body })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Query pairs with `null` values left out.
fn query_pairs(params: &Params) -> Vec<(&str, &Value)> {
    params
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.as_str(), v))
        .collect()
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else if err.is_builder() {
        TransportError::Serialization(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mia_types::{Endpoint, TEST_BASE_URL};

    fn request(endpoint: Endpoint, entity_id: Option<&str>) -> ApiRequest<'_> {
        ApiRequest {
            method: HttpMethod::Get,
            endpoint,
            data: None,
            params: None,
            token: "token",
            entity_id,
        }
    }

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(ClientConfig::default());
        assert_eq!(transport.config().base_url, mia_types::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_url_for_substitutes_id() {
        let transport = HttpTransport::with_base_url(TEST_BASE_URL);
        let url = transport
            .url_for(&request(Endpoint::PaymentsRefund, Some("pay-1")))
            .unwrap();
        assert_eq!(
            url,
            "https://test-ipspj.victoriabank.md/api/v1/payments/pay-1/refund"
        );
    }

    #[test]
    fn test_url_for_missing_id_is_invalid_url() {
        let transport = HttpTransport::with_base_url(TEST_BASE_URL);
        let err = transport
            .url_for(&request(Endpoint::QrStatus, None))
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[test]
    fn test_query_pairs_skip_null() {
        let params = serde_json::json!({"dateFrom": "2024-01-01", "dateTo": null, "page": 2});
        let pairs = query_pairs(params.as_object().unwrap());
        let keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["dateFrom", "page"]);
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(to_reqwest_method(HttpMethod::Delete), Method::DELETE);
    }
}
