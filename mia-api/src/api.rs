//! MIA API dispatcher
//!
//! Validates inputs locally, then routes each operation through the
//! transport port. Contains NO wire logic - URLs, headers and body encoding
//! belong to the transport.

use mia_client::{ClientConfig, HttpTransport};
use mia_types::{
    ApiRequest, Endpoint, HttpMethod, MiaError, Operation, Params, Payload, Transport,
};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::validate::{validate_access_token, validate_id_param, validate_params};

/// Factory for ready-to-use [`MiaApi`] instances.
pub struct MiaApiRequest;

impl MiaApiRequest {
    /// Creates an API bound to `base_url`, or to the production host when `None`.
    pub fn create(base_url: Option<&str>) -> MiaApi<HttpTransport> {
        let config = match base_url {
            Some(url) => ClientConfig::default().with_base_url(url),
            None => ClientConfig::default(),
        };
        Self::with_config(config)
    }

    pub fn with_config(config: ClientConfig) -> MiaApi<HttpTransport> {
        MiaApi::new(HttpTransport::new(config))
    }
}

/// Dispatcher for MIA operations.
///
/// Generic over `T: Transport` - the transport is injected at construction.
/// Every method fails fast: no request is sent unless the payload, id and
/// token checks all pass.
pub struct MiaApi<T: Transport> {
    transport: T,
}

impl<T: Transport> MiaApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // QR
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers a new payee-presented QR code.
    ///
    /// Requires `header` and `extension` in `data`.
    #[instrument(skip_all, fields(endpoint = %Operation::QR_CREATE.endpoint))]
    pub async fn qr_create(
        &self,
        data: Option<&Payload>,
        params: Option<&Params>,
        token: &str,
    ) -> Result<Value, MiaError> {
        self.execute_operation(Operation::QR_CREATE, data, params, token)
            .await
    }

    /// Status of a QR header, its last extensions and their last payments.
    #[instrument(skip(self, params, token), fields(endpoint = %Operation::QR_STATUS.endpoint))]
    pub async fn qr_status(
        &self,
        qr_id: &str,
        params: Option<&Params>,
        token: &str,
    ) -> Result<Value, MiaError> {
        self.execute_entity_id_operation(Operation::QR_STATUS, qr_id, None, params, token)
            .await
    }

    /// Cancels a QR code, including its active extension if any.
    #[instrument(skip(self, token), fields(endpoint = %Operation::QR_CANCEL.endpoint))]
    pub async fn qr_cancel(&self, qr_id: &str, token: &str) -> Result<Value, MiaError> {
        self.execute_entity_id_operation(Operation::QR_CANCEL, qr_id, None, None, token)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // QR Extensions
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers a new extension for a HYBR or STAT QR code.
    #[instrument(skip(self, data, token), fields(endpoint = %Operation::QR_EXTENSION_CREATE.endpoint))]
    pub async fn qr_create_extension(
        &self,
        qr_id: &str,
        data: Option<&Payload>,
        token: &str,
    ) -> Result<Value, MiaError> {
        self.execute_entity_id_operation(Operation::QR_EXTENSION_CREATE, qr_id, data, None, token)
            .await
    }

    /// Cancels the active extension of a hybrid QR code.
    #[instrument(skip(self, token), fields(endpoint = %Operation::QR_EXTENSION_CANCEL.endpoint))]
    pub async fn qr_cancel_extension(&self, qr_id: &str, token: &str) -> Result<Value, MiaError> {
        self.execute_entity_id_operation(Operation::QR_EXTENSION_CANCEL, qr_id, None, None, token)
            .await
    }

    /// Status of a QR extension and its last payments.
    #[instrument(skip(self, params, token), fields(endpoint = %Operation::QR_EXTENSION_STATUS.endpoint))]
    pub async fn qr_extension_status(
        &self,
        qr_extension_id: &str,
        params: Option<&Params>,
        token: &str,
    ) -> Result<Value, MiaError> {
        self.execute_entity_id_operation(
            Operation::QR_EXTENSION_STATUS,
            qr_extension_id,
            None,
            params,
            token,
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reconciliation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Transaction list for reconciliation.
    #[instrument(skip_all, fields(endpoint = %Operation::TRANSACTIONS_LIST.endpoint))]
    pub async fn transactions_list(
        &self,
        params: Option<&Params>,
        token: &str,
    ) -> Result<Value, MiaError> {
        self.execute_operation(Operation::TRANSACTIONS_LIST, None, params, token)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────────

    /// Simulates a payment against a QR header on the demo-pay sandbox.
    ///
    /// Requires `qrHeaderUUID` in `data`.
    #[instrument(skip_all, fields(endpoint = %Operation::TEST_PAY.endpoint))]
    pub async fn test_pay(&self, data: Option<&Payload>, token: &str) -> Result<Value, MiaError> {
        self.execute_operation(Operation::TEST_PAY, data, None, token)
            .await
    }

    /// Details of a single payment.
    #[instrument(skip(self, token), fields(endpoint = %Operation::PAYMENT_DETAILS.endpoint))]
    pub async fn payment_details(&self, pay_id: &str, token: &str) -> Result<Value, MiaError> {
        self.execute_entity_id_operation(Operation::PAYMENT_DETAILS, pay_id, None, None, token)
            .await
    }

    /// Refunds a payment.
    #[instrument(skip(self, data, token), fields(endpoint = %Operation::PAYMENT_REFUND.endpoint))]
    pub async fn payment_refund(
        &self,
        pay_id: &str,
        data: Option<&Payload>,
        token: &str,
    ) -> Result<Value, MiaError> {
        self.execute_entity_id_operation(Operation::PAYMENT_REFUND, pay_id, data, None, token)
            .await
    }

    /// Payments list with filter.
    #[instrument(skip_all, fields(endpoint = %Operation::PAYMENT_LIST.endpoint))]
    pub async fn payment_list(
        &self,
        params: Option<&Params>,
        token: &str,
    ) -> Result<Value, MiaError> {
        self.execute_operation(Operation::PAYMENT_LIST, None, params, token)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────────

    async fn execute_operation(
        &self,
        operation: Operation,
        data: Option<&Payload>,
        params: Option<&Params>,
        token: &str,
    ) -> Result<Value, MiaError> {
        validate_params(data, operation.required_params)
            .and_then(|_| validate_access_token(token))
            .inspect_err(|e| warn!(endpoint = %operation.endpoint, "Rejected request: {}", e))?;

        self.send_request(operation.method, operation.endpoint, data, params, token, None)
            .await
    }

    async fn execute_entity_id_operation(
        &self,
        operation: Operation,
        entity_id: &str,
        data: Option<&Payload>,
        params: Option<&Params>,
        token: &str,
    ) -> Result<Value, MiaError> {
        validate_id_param(entity_id)
            .and_then(|_| validate_access_token(token))
            .inspect_err(|e| warn!(endpoint = %operation.endpoint, "Rejected request: {}", e))?;

        self.send_request(
            operation.method,
            operation.endpoint,
            data,
            params,
            token,
            Some(entity_id),
        )
        .await
    }

    async fn send_request(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        data: Option<&Payload>,
        params: Option<&Params>,
        token: &str,
        entity_id: Option<&str>,
    ) -> Result<Value, MiaError> {
        debug!("Dispatching {} {}", method, endpoint);

        let request = ApiRequest {
            method,
            endpoint,
            data,
            params,
            token,
            entity_id,
        };

        let response = self.transport.send(request).await.map_err(|source| {
            error!("{} {} failed: {}", method, endpoint, source);
            MiaError::Transport {
                method,
                endpoint,
                source,
            }
        })?;

        let status = response.status;
        self.transport
            .handle_response(response, endpoint)
            .inspect_err(|_| warn!("{} {} returned HTTP {}", method, endpoint, status))
    }
}
