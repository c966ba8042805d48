//! Operation descriptors.
//!
//! Each MIA operation is fixed to one endpoint, one HTTP verb and a list of
//! payload fields that must be present before the request is sent.

use std::fmt;

use crate::endpoint::Endpoint;

/// HTTP verbs used by the MIA API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub endpoint: Endpoint,
    pub method: HttpMethod,
    pub required_params: &'static [&'static str],
}

impl Operation {
    const fn new(
        endpoint: Endpoint,
        method: HttpMethod,
        required_params: &'static [&'static str],
    ) -> Self {
        Self {
            endpoint,
            method,
            required_params,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // QR
    // ─────────────────────────────────────────────────────────────────────────

    pub const QR_CREATE: Operation =
        Operation::new(Endpoint::Qr, HttpMethod::Post, &["header", "extension"]);
    pub const QR_STATUS: Operation = Operation::new(Endpoint::QrStatus, HttpMethod::Get, &[]);
    pub const QR_CANCEL: Operation = Operation::new(Endpoint::QrId, HttpMethod::Delete, &[]);

    // ─────────────────────────────────────────────────────────────────────────
    // QR Extensions
    // ─────────────────────────────────────────────────────────────────────────

    pub const QR_EXTENSION_CREATE: Operation =
        Operation::new(Endpoint::QrExtensions, HttpMethod::Post, &[]);
    pub const QR_EXTENSION_CANCEL: Operation =
        Operation::new(Endpoint::QrActiveExtension, HttpMethod::Delete, &[]);
    pub const QR_EXTENSION_STATUS: Operation =
        Operation::new(Endpoint::QrExtensionStatus, HttpMethod::Get, &[]);

    // ─────────────────────────────────────────────────────────────────────────
    // Reconciliation
    // ─────────────────────────────────────────────────────────────────────────

    pub const TRANSACTIONS_LIST: Operation =
        Operation::new(Endpoint::TransactionsList, HttpMethod::Get, &[]);

    // ─────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────

    pub const TEST_PAY: Operation =
        Operation::new(Endpoint::DemoPay, HttpMethod::Post, &["qrHeaderUUID"]);
    pub const PAYMENT_DETAILS: Operation =
        Operation::new(Endpoint::PaymentsId, HttpMethod::Get, &[]);
    pub const PAYMENT_REFUND: Operation =
        Operation::new(Endpoint::PaymentsRefund, HttpMethod::Post, &[]);
    pub const PAYMENT_LIST: Operation = Operation::new(Endpoint::Payments, HttpMethod::Get, &[]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_identifier_operations_target_templated_endpoints() {
        for op in [
            Operation::QR_STATUS,
            Operation::QR_CANCEL,
            Operation::QR_EXTENSION_CREATE,
            Operation::QR_EXTENSION_CANCEL,
            Operation::QR_EXTENSION_STATUS,
            Operation::PAYMENT_DETAILS,
            Operation::PAYMENT_REFUND,
        ] {
            assert!(op.endpoint.requires_id(), "{} should take an id", op.endpoint);
        }
    }

    #[test]
    fn test_required_params() {
        assert_eq!(Operation::QR_CREATE.required_params, &["header", "extension"]);
        assert_eq!(Operation::TEST_PAY.required_params, &["qrHeaderUUID"]);
        assert!(Operation::PAYMENT_LIST.required_params.is_empty());
    }
}
