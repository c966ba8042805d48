//! Transport configuration.

use std::time::Duration;

use mia_types::{DEFAULT_BASE_URL, DEFAULT_DEMO_PAY_URL};

/// Hosts and limits used by [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub demo_pay_url: String,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            demo_pay_url: DEFAULT_DEMO_PAY_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Overrides the MIA API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the demo-pay sandbox host.
    pub fn with_demo_pay_url(mut self, demo_pay_url: impl Into<String>) -> Self {
        self.demo_pay_url = demo_pay_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
