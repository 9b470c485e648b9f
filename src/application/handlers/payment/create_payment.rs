//! CreatePaymentHandler - Command handler for payment creation.

use std::sync::Arc;

use crate::config::SigningConfig;
use crate::domain::payment::{CreatePaymentRequest, PaymentError, SignatureVerifier};
use crate::ports::{PaymentProcessor, ProcessorResponse};

/// Command to create a payment at the upstream processor.
#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
    /// The parsed creation body.
    pub request: CreatePaymentRequest,
}

/// Handler for payment creation.
///
/// Verifies the request signature, then forwards the request to the
/// upstream processor and relays its response envelope.
pub struct CreatePaymentHandler {
    signing: SigningConfig,
    processor: Arc<dyn PaymentProcessor>,
}

impl CreatePaymentHandler {
    pub fn new(signing: SigningConfig, processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { signing, processor }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentCommand,
    ) -> Result<ProcessorResponse, PaymentError> {
        tracing::info!(
            session_number = %cmd.request.session_number,
            invoice_number = %cmd.request.invoice_number,
            payment_method_code = %cmd.request.payment_method_code,
            "Payment creation received"
        );

        // 1. Verify the signature before anything leaves this service
        let verifier = SignatureVerifier::new(self.signing.secret_key.as_str());
        let valid = verifier.verify(&cmd.request).map_err(|e| {
            tracing::error!("Missing secret key in configuration");
            PaymentError::from(e)
        })?;

        if !valid {
            tracing::warn!(
                session_number = %cmd.request.session_number,
                "Invalid signature on payment creation"
            );
            return Err(PaymentError::validation(
                "Signature",
                "Invalid payment signature",
            ));
        }

        // 2. Forward to the processor and relay its envelope
        let response = self.processor.create_payment(&cmd.request).await?;

        tracing::info!(
            session_number = %cmd.request.session_number,
            success = response.success,
            "Payment creation forwarded"
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

    struct MockProcessor {
        fail_with: Option<fn() -> ProcessorError>,
    }

    #[async_trait]
    impl PaymentProcessor for MockProcessor {
        async fn create_payment(
            &self,
            request: &CreatePaymentRequest,
        ) -> Result<ProcessorResponse, ProcessorError> {
            if let Some(fail) = self.fail_with {
                return Err(fail());
            }
            Ok(ProcessorResponse {
                success: true,
                message: Some("Created".to_string()),
                data: Some(PaymentResult {
                    payment_number: "PN900".to_string(),
                    payment_status: "PENDING".to_string(),
                    session_number: request.session_number.clone(),
                    amount: request.amount,
                    currency_code: request.currency_code.clone(),
                    created_at: None,
                }),
            })
        }

        async fn check_status(
            &self,
            _request: &crate::domain::payment::PaymentStatusRequest,
        ) -> Result<ProcessorResponse, ProcessorError> {
            unimplemented!()
        }
    }

    fn signed_request(secret: &str) -> CreatePaymentRequest {
        let mut request = CreatePaymentRequest {
            session_number: "SESS42".to_string(),
            amount: "250.00".parse::<Decimal>().unwrap(),
            currency_code: "840".to_string(),
            account_number: "ACC1".to_string(),
            ..Default::default()
        };
        request.signature = SignatureVerifier::new(secret).sign(&request).unwrap();
        request
    }

    fn handler(secret: &str, fail_with: Option<fn() -> ProcessorError>) -> CreatePaymentHandler {
        CreatePaymentHandler::new(
            SigningConfig {
                secret_key: secret.to_string(),
            },
            Arc::new(MockProcessor { fail_with }),
        )
    }

    #[tokio::test]
    async fn forwards_valid_request() {
        let result = handler("sek", None)
            .handle(CreatePaymentCommand {
                request: signed_request("sek"),
            })
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.data.unwrap().payment_number, "PN900");
    }

    #[tokio::test]
    async fn invalid_signature_is_validation_failure() {
        let mut request = signed_request("sek");
        request.account_number = "ACC2".to_string();

        let result = handler("sek", None)
            .handle(CreatePaymentCommand { request })
            .await;

        assert!(matches!(
            result,
            Err(PaymentError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn upstream_status_is_relayed() {
        let result = handler(
            "sek",
            Some(|| ProcessorError::Status {
                status: 422,
                body: "rejected".to_string(),
            }),
        )
        .handle(CreatePaymentCommand {
            request: signed_request("sek"),
        })
        .await;

        assert!(matches!(
            result,
            Err(PaymentError::UpstreamStatus { status: 422, .. })
        ));
    }

    #[tokio::test]
    async fn missing_secret_short_circuits_before_forwarding() {
        let result = handler("", None)
            .handle(CreatePaymentCommand {
                request: signed_request("sek"),
            })
            .await;

        assert!(matches!(result, Err(PaymentError::MissingSecretKey)));
    }
}
