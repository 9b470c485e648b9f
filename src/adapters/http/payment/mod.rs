//! HTTP adapter for payment endpoints.
//!
//! Exposes the payment lifecycle via REST API:
//! - `POST /api/payment/webhook` - Payment status webhook
//! - `POST /api/payment/refund` - Refund notification
//! - `POST /api/payment/create` - Create payment (forwarded upstream)
//! - `POST /api/payment/status` - Check payment status (forwarded upstream)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PaymentAppState;
pub use routes::{payment_router, payment_routes};
