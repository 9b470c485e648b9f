//! ProcessRefundHandler - Command handler for refund notifications.

use crate::config::SigningConfig;
use crate::domain::payment::{PaymentError, PaymentRefundRequest, SignatureVerifier};

/// Command to process a refund notification.
#[derive(Debug, Clone)]
pub struct ProcessRefundCommand {
    /// The parsed refund body.
    pub request: PaymentRefundRequest,
}

/// Handler for refund notifications.
///
/// Same contract as the webhook handler: verify the signature, acknowledge
/// with an empty success response.
pub struct ProcessRefundHandler {
    signing: SigningConfig,
}

impl ProcessRefundHandler {
    pub fn new(signing: SigningConfig) -> Self {
        Self { signing }
    }

    pub async fn handle(&self, cmd: ProcessRefundCommand) -> Result<(), PaymentError> {
        tracing::info!(
            payment_number = %cmd.request.payment_number,
            session_number = %cmd.request.session_number,
            currency_code = %cmd.request.currency_code,
            "Payment refund received"
        );

        let verifier = SignatureVerifier::new(self.signing.secret_key.as_str());
        let valid = verifier.verify(&cmd.request).map_err(|e| {
            tracing::error!("Missing secret key in configuration");
            PaymentError::from(e)
        })?;

        if !valid {
            tracing::warn!(
                payment_number = %cmd.request.payment_number,
                "Invalid signature on refund notification"
            );
            return Err(PaymentError::InvalidSignature);
        }

        Ok(())
    }
}
