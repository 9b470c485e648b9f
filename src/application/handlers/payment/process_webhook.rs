//! ProcessWebhookHandler - Command handler for payment webhook notifications.

use crate::config::SigningConfig;
use crate::domain::payment::{PaymentError, PaymentWebhookRequest, SignatureVerifier};

/// Command to process a payment webhook notification.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    /// The parsed webhook body.
    pub request: PaymentWebhookRequest,
}

/// Handler for payment webhook notifications.
///
/// Verifies the request signature against the shared secret. There is
/// nothing to forward: a verified webhook is acknowledged with an empty
/// success response.
pub struct ProcessWebhookHandler {
    signing: SigningConfig,
}

impl ProcessWebhookHandler {
    pub fn new(signing: SigningConfig) -> Self {
        Self { signing }
    }

    pub async fn handle(&self, cmd: ProcessWebhookCommand) -> Result<(), PaymentError> {
        tracing::info!(
            payment_number = %cmd.request.payment_number,
            session_number = %cmd.request.session_number,
            payment_status = %cmd.request.payment_status,
            "Payment webhook received"
        );

        let verifier = SignatureVerifier::new(self.signing.secret_key.as_str());
        let valid = verifier.verify(&cmd.request).map_err(|e| {
            tracing::error!("Missing secret key in configuration");
            PaymentError::from(e)
        })?;

        if !valid {
            tracing::warn!(
                payment_number = %cmd.request.payment_number,
                "Invalid signature on payment webhook"
            );
            return Err(PaymentError::InvalidSignature);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn signed_request(secret: &str) -> PaymentWebhookRequest {
        let mut request = PaymentWebhookRequest {
            signature: String::new(),
            amount: "100.50".parse::<Decimal>().unwrap(),
            payment_status: "COMPLETED".to_string(),
            payment_number: "PN123".to_string(),
            session_number: "SESS1".to_string(),
        };
        request.signature = SignatureVerifier::new(secret).sign(&request).unwrap();
        request
    }

    fn handler(secret: &str) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(SigningConfig {
            secret_key: secret.to_string(),
        })
    }

    #[tokio::test]
    async fn accepts_valid_signature() {
        let result = handler("topsecret")
            .handle(ProcessWebhookCommand {
                request: signed_request("topsecret"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_signature_from_other_secret() {
        let result = handler("topsecret")
            .handle(ProcessWebhookCommand {
                request: signed_request("othersecret"),
            })
            .await;

        assert!(matches!(result, Err(PaymentError::InvalidSignature)));
    }

    #[tokio::test]
    async fn missing_secret_is_configuration_error() {
        let result = handler("")
            .handle(ProcessWebhookCommand {
                request: signed_request("topsecret"),
            })
            .await;

        assert!(matches!(result, Err(PaymentError::MissingSecretKey)));
    }
}
