//! CheckPaymentStatusHandler - Command handler for payment status checks.

use std::sync::Arc;

use crate::config::SigningConfig;
use crate::domain::payment::{PaymentError, PaymentStatusRequest, SignatureVerifier};
use crate::ports::{PaymentProcessor, ProcessorResponse};

/// Command to look up a payment's status at the upstream processor.
#[derive(Debug, Clone)]
pub struct CheckPaymentStatusCommand {
    /// The parsed status-check body.
    pub request: PaymentStatusRequest,
}

/// Handler for payment status checks.
///
/// Verifies the request signature, then forwards the request to the
/// upstream processor and relays its response envelope.
pub struct CheckPaymentStatusHandler {
    signing: SigningConfig,
    processor: Arc<dyn PaymentProcessor>,
}

impl CheckPaymentStatusHandler {
    pub fn new(signing: SigningConfig, processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { signing, processor }
    }

    pub async fn handle(
        &self,
        cmd: CheckPaymentStatusCommand,
    ) -> Result<ProcessorResponse, PaymentError> {
        tracing::info!(
            session_number = %cmd.request.session_number,
            "Payment status check received"
        );

        let verifier = SignatureVerifier::new(self.signing.secret_key.as_str());
        let valid = verifier.verify(&cmd.request).map_err(|e| {
            tracing::error!("Missing secret key in configuration");
            PaymentError::from(e)
        })?;

        if !valid {
            tracing::warn!(
                session_number = %cmd.request.session_number,
                "Invalid signature on status check"
            );
            return Err(PaymentError::validation(
                "Signature",
                "Invalid payment signature",
            ));
        }

        let response = self.processor.check_status(&cmd.request).await?;

        tracing::info!(
            session_number = %cmd.request.session_number,
            success = response.success,
            "Payment status check forwarded"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{PaymentResult, ProcessorError};
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    struct MockProcessor;

    #[async_trait]
    impl PaymentProcessor for MockProcessor {
        async fn create_payment(
            &self,
            _request: &crate::domain::payment::CreatePaymentRequest,
        ) -> Result<ProcessorResponse, ProcessorError> {
            unimplemented!()
        }

        async fn check_status(
            &self,
            request: &PaymentStatusRequest,
        ) -> Result<ProcessorResponse, ProcessorError> {
            Ok(ProcessorResponse {
                success: true,
                message: None,
                data: Some(PaymentResult {
                    payment_number: "PN1".to_string(),
                    payment_status: "COMPLETED".to_string(),
                    session_number: request.session_number.clone(),
                    amount: request.amount,
                    currency_code: "840".to_string(),
                    created_at: None,
                }),
            })
        }
    }

    fn signed_request(secret: &str) -> PaymentStatusRequest {
        let mut request = PaymentStatusRequest {
            signature: String::new(),
            amount: "9.99".parse::<Decimal>().unwrap(),
            session_number: "SESS9".to_string(),
        };
        request.signature = SignatureVerifier::new(secret).sign(&request).unwrap();
        request
    }

    fn handler(secret: &str) -> CheckPaymentStatusHandler {
        CheckPaymentStatusHandler::new(
            SigningConfig {
                secret_key: secret.to_string(),
            },
            Arc::new(MockProcessor),
        )
    }

    #[tokio::test]
    async fn forwards_valid_request() {
        let result = handler("sek")
            .handle(CheckPaymentStatusCommand {
                request: signed_request("sek"),
            })
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.data.unwrap().payment_status, "COMPLETED");
    }

    #[tokio::test]
    async fn invalid_signature_is_validation_failure() {
        let mut request = signed_request("sek");
        request.session_number = "SESS10".to_string();

        let result = handler("sek")
            .handle(CheckPaymentStatusCommand { request })
            .await;

        assert!(matches!(
            result,
            Err(PaymentError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn missing_secret_is_configuration_error() {
        let result = handler("")
            .handle(CheckPaymentStatusCommand {
                request: signed_request("sek"),
            })
            .await;

        assert!(matches!(result, Err(PaymentError::MissingSecretKey)));
    }
}
