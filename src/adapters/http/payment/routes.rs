//! Axum router configuration for payment endpoints.
//!
//! This module defines the route structure for the payment lifecycle API
//! and wires the routes to their corresponding handlers.

use axum::{routing::post, Router};

use super::handlers::{
    create_payment, payment_refund, payment_status, payment_webhook, PaymentAppState,
};

/// Create the payment API router.
///
/// # Routes
///
/// All routes are signature-verified; none require separate authentication.
///
/// ## Notification Endpoints
/// - `POST /webhook` - Payment status webhook (verify, acknowledge)
/// - `POST /refund` - Refund notification (verify, acknowledge)
///
/// ## Forwarding Endpoints
/// - `POST /create` - Create payment (verify, forward upstream)
/// - `POST /status` - Check payment status (verify, forward upstream)
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/webhook", post(payment_webhook))
        .route("/refund", post(payment_refund))
        .route("/create", post(create_payment))
        .route("/status", post(payment_status))
}

/// Create the complete payment module router.
///
/// Suitable for mounting under `/api`:
///
/// ```ignore
/// use axum::Router;
/// use payment_relay::adapters::http::payment::{payment_router, PaymentAppState};
///
/// let app_state = PaymentAppState { /* ... */ };
/// let app = Router::new()
///     .nest("/api", payment_router())
///     .with_state(app_state);
/// ```
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().nest("/payment", payment_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::SigningConfig;
    use crate::domain::payment::{CreatePaymentRequest, PaymentStatusRequest};
    use crate::ports::{PaymentProcessor, ProcessorError, ProcessorResponse};
    use async_trait::async_trait;

    struct MockPaymentProcessor;

    #[async_trait]
    impl PaymentProcessor for MockPaymentProcessor {
        async fn create_payment(
            &self,
            _request: &CreatePaymentRequest,
        ) -> Result<ProcessorResponse, ProcessorError> {
            Ok(ProcessorResponse {
                success: true,
                message: None,
                data: None,
            })
        }

        async fn check_status(
            &self,
            _request: &PaymentStatusRequest,
        ) -> Result<ProcessorResponse, ProcessorError> {
            Ok(ProcessorResponse {
                success: true,
                message: None,
                data: None,
            })
        }
    }

    fn test_state() -> PaymentAppState {
        PaymentAppState {
            signing: SigningConfig {
                secret_key: "topsecret".to_string(),
            },
            processor: Arc::new(MockPaymentProcessor),
        }
    }

    #[test]
    fn payment_routes_creates_router() {
        let router = payment_routes();
        // Just verify it creates without panic
        let _: Router<()> = router.with_state(test_state());
    }

    #[test]
    fn payment_router_creates_combined_router() {
        let router = payment_router();
        let _: Router<()> = router.with_state(test_state());
    }
}
