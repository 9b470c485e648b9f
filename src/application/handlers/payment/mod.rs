//! Payment handlers.
//!
//! Command handlers for the four payment lifecycle operations:
//!
//! - Processing webhook notifications (verify, acknowledge)
//! - Processing refund notifications (verify, acknowledge)
//! - Creating payments (verify, forward upstream, relay response)
//! - Checking payment status (verify, forward upstream, relay response)

mod check_payment_status;
mod create_payment;
mod process_refund;
mod process_webhook;

pub use check_payment_status::{CheckPaymentStatusCommand, CheckPaymentStatusHandler};
pub use create_payment::{CreatePaymentCommand, CreatePaymentHandler};
pub use process_refund::{ProcessRefundCommand, ProcessRefundHandler};
pub use process_webhook::{ProcessWebhookCommand, ProcessWebhookHandler};
