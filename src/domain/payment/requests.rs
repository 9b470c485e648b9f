//! Payment lifecycle request records.
//!
//! Defines the four request shapes accepted by the relay. Wire bodies use
//! PascalCase member names to match the payment processor's serializer.
//! Each record carries a `Signature` field: the hex digest the caller
//! computed over the record's canonical string.
//!
//! Absent members deserialize to their zero values (empty strings, `0.00`,
//! the nil UUID) rather than failing; a request missing signed data simply
//! produces a non-matching signature.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Webhook notification for a payment status change.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaymentWebhookRequest {
    /// Caller-supplied hex digest to verify against.
    pub signature: String,

    /// Payment amount.
    pub amount: Decimal,

    /// Payment status reported by the processor (e.g. "COMPLETED").
    pub payment_status: String,

    /// Processor-assigned payment number.
    pub payment_number: String,

    /// Session the payment belongs to.
    pub session_number: String,
}

/// Notification that a payment was refunded.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaymentRefundRequest {
    /// Caller-supplied hex digest to verify against.
    pub signature: String,

    /// Refunded amount.
    pub amount: Decimal,

    /// Processor-assigned payment number.
    pub payment_number: String,

    /// Session the payment belongs to.
    pub session_number: String,

    /// ISO 4217 numeric currency code (e.g. "840").
    pub currency_code: String,
}

/// Request to create a payment at the upstream processor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePaymentRequest {
    /// Caller-supplied hex digest to verify against.
    pub signature: String,

    /// Payment method code (e.g. "CARD").
    pub payment_method_code: String,

    /// Session the payment belongs to.
    pub session_number: String,

    /// Terminal the payment originates from.
    pub terminal_id: Uuid,

    /// Payment amount.
    pub amount: Decimal,

    /// ISO 4217 numeric currency code.
    pub currency_code: String,

    /// Account to charge.
    pub account_number: String,

    /// Payer's phone number, digits only.
    pub user_msisdn: u64,

    /// Payer's identifier.
    pub user_id: Uuid,

    /// Account type code (e.g. "SAV").
    pub account_type_code: String,

    /// Payer's display name.
    pub user_full_name: String,

    /// Invoice being paid.
    pub invoice_number: String,

    /// Opaque key/value pairs forwarded to the processor unchanged.
    /// Not covered by the signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParamItem>>,
}

/// Key/value parameter forwarded with a payment creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParamItem {
    pub key: String,
    pub value: String,
}

/// Request to look up the status of a payment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaymentStatusRequest {
    /// Caller-supplied hex digest to verify against.
    pub signature: String,

    /// Payment amount.
    pub amount: Decimal,

    /// Session the payment belongs to.
    pub session_number: String,
}
