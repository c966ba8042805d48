//! Endpoint catalogue for the MIA REST contract.

use std::fmt;

/// Production host of the MIA API.
pub const DEFAULT_BASE_URL: &str = "https://ips-api-pj.vb.md/";

/// Sandbox host of the MIA API.
pub const TEST_BASE_URL: &str = "https://test-ipspj.victoriabank.md/";

/// Sandbox host that simulates payments against a QR header.
pub const DEFAULT_DEMO_PAY_URL: &str = "https://test-ipspj-demopay.victoriabank.md/";

/// Placeholder substituted with the entity identifier.
const ID_PLACEHOLDER: &str = "{id}";

/// Errors raised while turning an endpoint into a URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Endpoint {0} requires an entity ID")]
    MissingEntityId(Endpoint),
}

/// A named endpoint of the MIA API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Register a payee-presented QR code.
    Qr,
    /// QR header by id (cancel).
    QrId,
    /// Status of a QR header with its latest extensions and payments.
    QrStatus,
    /// Register a new extension for a HYBR or STAT QR code.
    QrExtensions,
    /// Active extension of a hybrid QR code.
    QrActiveExtension,
    /// Status of a single QR extension.
    QrExtensionStatus,
    /// Reconciliation transaction list.
    TransactionsList,
    /// Sandbox payment simulation.
    DemoPay,
    /// Payments list with filter.
    Payments,
    /// Payment by id.
    PaymentsId,
    /// Refund of a payment.
    PaymentsRefund,
}

impl Endpoint {
    /// Returns the path template relative to the host.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Qr => "api/v1/qr",
            Endpoint::QrId => "api/v1/qr/{id}",
            Endpoint::QrStatus => "api/v1/qr/{id}/status",
            // Upstream spelling.
            Endpoint::QrExtensions => "api/v1/qr/{id}/extentions",
            Endpoint::QrActiveExtension => "api/v1/qr/{id}/active-extension",
            Endpoint::QrExtensionStatus => "api/v1/qr-extensions/{id}/status",
            Endpoint::TransactionsList => "api/v1/reconciliation/transactions",
            Endpoint::DemoPay => "api/Pay",
            Endpoint::Payments => "api/v1/payments",
            Endpoint::PaymentsId => "api/v1/payments/{id}",
            Endpoint::PaymentsRefund => "api/v1/payments/{id}/refund",
        }
    }

    /// Whether the path template carries an entity id placeholder.
    pub fn requires_id(&self) -> bool {
        self.path().contains(ID_PLACEHOLDER)
    }

    /// Whether this endpoint lives on the demo-pay sandbox host.
    pub fn is_demo_pay(&self) -> bool {
        matches!(self, Endpoint::DemoPay)
    }

    /// Builds the absolute URL for this endpoint.
    ///
    /// `entity_id` is ignored by endpoints without a placeholder. It is
    /// percent-encoded as a single path segment.
    pub fn resolve(
        &self,
        base_url: &str,
        demo_pay_url: &str,
        entity_id: Option<&str>,
    ) -> Result<String, EndpointError> {
        let host = if self.is_demo_pay() {
            demo_pay_url
        } else {
            base_url
        };

        let path = if self.requires_id() {
            match entity_id {
                Some(id) if !id.is_empty() => {
                    self.path().replace(ID_PLACEHOLDER, &urlencoding::encode(id))
                }
                _ => return Err(EndpointError::MissingEntityId(*self)),
            }
        } else {
            self.path().to_string()
        };

        Ok(format!("{}/{}", host.trim_end_matches('/'), path))
    }

    /// Returns every endpoint in catalogue order.
    pub fn all() -> &'static [Endpoint] {
        &[
            Endpoint::Qr,
            Endpoint::QrId,
            Endpoint::QrStatus,
            Endpoint::QrExtensions,
            Endpoint::QrActiveExtension,
            Endpoint::QrExtensionStatus,
            Endpoint::TransactionsList,
            Endpoint::DemoPay,
            Endpoint::Payments,
            Endpoint::PaymentsId,
            Endpoint::PaymentsRefund,
        ]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_id() {
        let url = Endpoint::Qr
            .resolve(DEFAULT_BASE_URL, DEFAULT_DEMO_PAY_URL, None)
            .unwrap();
        assert_eq!(url, "https://ips-api-pj.vb.md/api/v1/qr");
    }

    #[test]
    fn test_resolve_substitutes_id() {
        let url = Endpoint::QrStatus
            .resolve(TEST_BASE_URL, DEFAULT_DEMO_PAY_URL, Some("abc-123"))
            .unwrap();
        assert_eq!(
            url,
            "https://test-ipspj.victoriabank.md/api/v1/qr/abc-123/status"
        );
    }

    #[test]
    fn test_resolve_base_without_trailing_slash() {
        let url = Endpoint::Payments
            .resolve("http://localhost:8080", DEFAULT_DEMO_PAY_URL, None)
            .unwrap();
        assert_eq!(url, "http://localhost:8080/api/v1/payments");
    }

    #[test]
    fn test_resolve_demo_pay_uses_sandbox_host() {
        let url = Endpoint::DemoPay
            .resolve(DEFAULT_BASE_URL, DEFAULT_DEMO_PAY_URL, None)
            .unwrap();
        assert_eq!(url, "https://test-ipspj-demopay.victoriabank.md/api/Pay");
    }

    #[test]
    fn test_resolve_missing_id_fails() {
        let result = Endpoint::PaymentsRefund.resolve(DEFAULT_BASE_URL, DEFAULT_DEMO_PAY_URL, None);
        assert_eq!(
            result,
            Err(EndpointError::MissingEntityId(Endpoint::PaymentsRefund))
        );

        let result =
            Endpoint::PaymentsRefund.resolve(DEFAULT_BASE_URL, DEFAULT_DEMO_PAY_URL, Some(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_encodes_id_as_one_segment() {
        let resolve = |id: &str| {
            Endpoint::PaymentsRefund
                .resolve("http://localhost", DEFAULT_DEMO_PAY_URL, Some(id))
                .unwrap()
        };
        assert_eq!(
            resolve("x/../../qr/abc"),
            "http://localhost/api/v1/payments/x%2F..%2F..%2Fqr%2Fabc/refund"
        );
        assert_eq!(resolve("a?x=1"), "http://localhost/api/v1/payments/a%3Fx%3D1/refund");
        assert_eq!(resolve("a#frag"), "http://localhost/api/v1/payments/a%23frag/refund");
        assert_eq!(
            resolve("d3a1c9c4-3f0e-4c8e-9b1a-2f7e8b6a0c11"),
            "http://localhost/api/v1/payments/d3a1c9c4-3f0e-4c8e-9b1a-2f7e8b6a0c11/refund"
        );
    }

    #[test]
    fn test_requires_id() {
        let with_id: Vec<_> = Endpoint::all()
            .iter()
            .filter(|e| e.requires_id())
            .collect();
        assert_eq!(with_id.len(), 7);
        assert!(!Endpoint::TransactionsList.requires_id());
    }

    #[test]
    fn test_display_is_path_template() {
        assert_eq!(Endpoint::QrExtensionStatus.to_string(), "api/v1/qr-extensions/{id}/status");
    }
}
