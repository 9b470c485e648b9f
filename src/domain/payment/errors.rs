//! Payment domain error types.
//!
//! Defines the error conditions surfaced by signature verification and
//! upstream forwarding, with the HTTP mapping applied in the HTTP adapter.

use thiserror::Error;

/// Errors from the signing core itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The shared secret is unset; nothing was canonicalized.
    #[error("Missing secret key in configuration")]
    MissingSecret,
}

/// Errors that occur while processing a payment lifecycle request.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Request signature verification failed on a notification route.
    #[error("Invalid request signature")]
    InvalidSignature,

    /// Request failed validation (creation/check routes report signature
    /// failures this way, as a client error with a readable message).
    #[error("{message}")]
    ValidationFailed { field: String, message: String },

    /// The shared secret is not configured.
    #[error("Missing secret key in configuration")]
    MissingSecretKey,

    /// A processor setting required for forwarding is not configured.
    #[error("Missing processor configuration: {0}")]
    MissingProcessorConfig(&'static str),

    /// The upstream processor answered with a non-success status.
    #[error("Upstream processor returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// The upstream processor could not be reached.
    #[error("Upstream processor unreachable: {0}")]
    UpstreamTransport(String),

    /// The upstream processor's response could not be parsed.
    #[error("Invalid upstream response: {0}")]
    UpstreamResponse(String),
}

impl PaymentError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true for failures of this service's own configuration, as
    /// opposed to bad input or upstream faults.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PaymentError::MissingSecretKey | PaymentError::MissingProcessorConfig(_)
        )
    }
}

impl From<SignatureError> for PaymentError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::MissingSecret => PaymentError::MissingSecretKey,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_error_converts_to_missing_secret_key() {
        let err: PaymentError = SignatureError::MissingSecret.into();
        assert!(matches!(err, PaymentError::MissingSecretKey));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn validation_error_displays_message() {
        let err = PaymentError::validation("Signature", "Invalid payment signature");
        assert_eq!(err.to_string(), "Invalid payment signature");
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn upstream_status_displays_code() {
        let err = PaymentError::UpstreamStatus {
            status: 422,
            body: "{}".to_string(),
        };
        assert!(err.to_string().contains("422"));
    }
}
