//! Payment processor port for upstream forwarding.
//!
//! Defines the contract for the external payment processor API that
//! creation and status-check requests are forwarded to after their
//! signatures verify. Implementations own transport, authentication, and
//! response parsing; they do not retry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::payment::{CreatePaymentRequest, PaymentStatusRequest};

/// Port for the upstream payment processor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Forward a verified payment creation request.
    ///
    /// Returns the processor's parsed response envelope, relayed verbatim
    /// to the original caller.
    async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<ProcessorResponse, ProcessorError>;

    /// Forward a verified payment status check.
    async fn check_status(
        &self,
        request: &PaymentStatusRequest,
    ) -> Result<ProcessorResponse, ProcessorError>;
}

/// Response envelope returned by the processor API.
///
/// Wire member names are PascalCase, matching the processor's serializer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorResponse {
    /// Whether the processor accepted the operation.
    pub success: bool,

    /// Human-readable outcome description, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payment details when the operation produced them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PaymentResult>,
}

/// Payment details inside a processor response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentResult {
    /// Processor-assigned payment number.
    pub payment_number: String,

    /// Current payment status (e.g. "PENDING", "COMPLETED").
    pub payment_status: String,

    /// Session the payment belongs to.
    #[serde(default)]
    pub session_number: String,

    /// Payment amount.
    pub amount: Decimal,

    /// ISO 4217 numeric currency code.
    #[serde(default)]
    pub currency_code: String,

    /// When the processor created the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Errors from payment processor operations.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The processor could not be reached.
    #[error("Processor request failed: {0}")]
    Network(String),

    /// The processor answered with a non-success HTTP status.
    #[error("Processor returned status {status}")]
    Status { status: u16, body: String },

    /// The processor's response body could not be parsed.
    #[error("Failed to parse processor response: {0}")]
    InvalidResponse(String),

    /// A setting required to reach the processor is not configured.
    #[error("Missing processor configuration: {0}")]
    MissingConfiguration(&'static str),
}

impl ProcessorError {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProcessorError::Network(_))
    }
}

impl From<ProcessorError> for crate::domain::payment::PaymentError {
    fn from(err: ProcessorError) -> Self {
        use crate::domain::payment::PaymentError;

        match err {
            ProcessorError::Network(msg) => PaymentError::UpstreamTransport(msg),
            ProcessorError::Status { status, body } => {
                PaymentError::UpstreamStatus { status, body }
            }
            ProcessorError::InvalidResponse(msg) => PaymentError::UpstreamResponse(msg),
            ProcessorError::MissingConfiguration(key) => {
                PaymentError::MissingProcessorConfig(key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_processor_is_object_safe() {
        fn _accepts_dyn(_processor: &dyn PaymentProcessor) {}
    }

    #[test]
    fn processor_error_retryable() {
        assert!(ProcessorError::Network("timeout".to_string()).is_retryable());

        assert!(!ProcessorError::Status {
            status: 400,
            body: String::new()
        }
        .is_retryable());
        assert!(!ProcessorError::MissingConfiguration("PROCESSOR_API_KEY").is_retryable());
    }

    #[test]
    fn envelope_deserializes_pascal_case() {
        let json = r#"{
            "Success": true,
            "Message": "Created",
            "Data": {
                "PaymentNumber": "PN77",
                "PaymentStatus": "PENDING",
                "SessionNumber": "SESS7",
                "Amount": 12.50,
                "CurrencyCode": "840"
            }
        }"#;

        let envelope: ProcessorResponse = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data.payment_number, "PN77");
        assert_eq!(data.payment_status, "PENDING");
    }

    #[test]
    fn envelope_tolerates_missing_optional_members() {
        let json = r#"{"Success": false}"#;

        let envelope: ProcessorResponse = serde_json::from_str(json).unwrap();

        assert!(!envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }
}
