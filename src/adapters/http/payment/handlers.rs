//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{
    CheckPaymentStatusCommand, CheckPaymentStatusHandler, CreatePaymentCommand,
    CreatePaymentHandler, ProcessRefundCommand, ProcessRefundHandler, ProcessWebhookCommand,
    ProcessWebhookHandler,
};
use crate::config::SigningConfig;
use crate::domain::payment::{
    CreatePaymentRequest, PaymentError, PaymentRefundRequest, PaymentStatusRequest,
    PaymentWebhookRequest,
};
use crate::ports::PaymentProcessor;

use super::dto::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains the signing
/// configuration plus the Arc-wrapped processor port.
#[derive(Clone)]
pub struct PaymentAppState {
    pub signing: SigningConfig,
    pub processor: Arc<dyn PaymentProcessor>,
}

impl PaymentAppState {
    /// Create handlers on demand from the shared state.
    pub fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(self.signing.clone())
    }

    pub fn refund_handler(&self) -> ProcessRefundHandler {
        ProcessRefundHandler::new(self.signing.clone())
    }

    pub fn create_payment_handler(&self) -> CreatePaymentHandler {
        CreatePaymentHandler::new(self.signing.clone(), self.processor.clone())
    }

    pub fn status_handler(&self) -> CheckPaymentStatusHandler {
        CheckPaymentStatusHandler::new(self.signing.clone(), self.processor.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Notification Handlers (verify and acknowledge)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payment/webhook - Handle a payment webhook notification
pub async fn payment_webhook(
    State(state): State<PaymentAppState>,
    Json(request): Json<PaymentWebhookRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.webhook_handler();
    handler.handle(ProcessWebhookCommand { request }).await?;

    Ok(StatusCode::OK)
}

/// POST /api/payment/refund - Handle a refund notification
pub async fn payment_refund(
    State(state): State<PaymentAppState>,
    Json(request): Json<PaymentRefundRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.refund_handler();
    handler.handle(ProcessRefundCommand { request }).await?;

    Ok(StatusCode::OK)
}

// ════════════════════════════════════════════════════════════════════════════════
// Forwarding Handlers (verify, forward upstream, relay response)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payment/create - Create a payment at the upstream processor
pub async fn create_payment(
    State(state): State<PaymentAppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.create_payment_handler();
    let response = handler.handle(CreatePaymentCommand { request }).await?;

    Ok(Json(response))
}

/// POST /api/payment/status - Check a payment's status at the upstream processor
pub async fn payment_status(
    State(state): State<PaymentAppState>,
    Json(request): Json<PaymentStatusRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.status_handler();
    let response = handler
        .handle(CheckPaymentStatusCommand { request })
        .await?;

    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
pub struct PaymentApiError(PaymentError);

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            PaymentError::InvalidSignature => (StatusCode::UNAUTHORIZED, "INVALID_SIGNATURE"),
            PaymentError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            PaymentError::MissingSecretKey | PaymentError::MissingProcessorConfig(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
            // Relay the upstream's own status; the body stays in our logs.
            PaymentError::UpstreamStatus { status, .. } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "UPSTREAM_REJECTED",
            ),
            PaymentError::UpstreamTransport(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_UNAVAILABLE")
            }
            PaymentError::UpstreamResponse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_RESPONSE_INVALID",
            ),
        };

        let message = match &self.0 {
            // Upstream transport/parse details are logged, not echoed.
            PaymentError::UpstreamTransport(_) => {
                "Payment processor is unavailable".to_string()
            }
            PaymentError::UpstreamResponse(_) => {
                "Payment processor returned an unreadable response".to_string()
            }
            PaymentError::UpstreamStatus { status, .. } => {
                format!("Payment processor rejected the request (status {})", status)
            }
            other => other.to_string(),
        };

        let error = ErrorResponse::new(error_code, message);
        (status, Json(error)).into_response()
    }
}
