//! Canonical string construction for request signing.
//!
//! Every signed request kind concatenates a fixed subset of its fields, in a
//! hardcoded order, into the "raw data" string that both sides hash. The
//! field sequence is part of the wire contract with the payment processor:
//! it is written out explicitly per kind and never derived from struct or
//! map iteration order.
//!
//! Amounts are rendered with exactly two fractional digits and a `.`
//! separator. `rust_decimal` formatting does not consult the process locale,
//! so a host configured with a `,` decimal separator produces the same bytes.

use std::fmt::Write;

use rust_decimal::Decimal;

use super::requests::{
    CreatePaymentRequest, PaymentRefundRequest, PaymentStatusRequest, PaymentWebhookRequest,
};

/// A request whose signature covers a fixed sequence of its fields.
pub trait CanonicalRequest {
    /// Appends this request's signed fields, in canonical order, to `out`.
    fn write_canonical_fields(&self, out: &mut String);

    /// The hex digest supplied by the caller.
    fn supplied_signature(&self) -> &str;

    /// The signed fields as a single string.
    ///
    /// This is the canonical string *without* the trailing secret, safe to
    /// emit to diagnostics.
    fn canonical_fields(&self) -> String {
        let mut out = String::new();
        self.write_canonical_fields(&mut out);
        out
    }
}

/// Builds the full canonical string: the signed fields followed by `.` and
/// the shared secret, with no separator between the last field and the dot.
pub fn canonical_string(fields: &str, secret: &str) -> String {
    format!("{}.{}", fields, secret)
}

/// Renders an amount with exactly two fractional digits and a `.` separator.
pub fn format_amount(amount: Decimal) -> String {
    let mut value = amount;
    value.rescale(2);
    value.to_string()
}

impl CanonicalRequest for PaymentWebhookRequest {
    // Amount, PaymentNumber, PaymentStatus, SessionNumber
    fn write_canonical_fields(&self, out: &mut String) {
        out.push_str(&format_amount(self.amount));
        out.push_str(&self.payment_number);
        out.push_str(&self.payment_status);
        out.push_str(&self.session_number);
    }

    fn supplied_signature(&self) -> &str {
        &self.signature
    }
}

impl CanonicalRequest for PaymentRefundRequest {
    // Amount, PaymentNumber, SessionNumber, CurrencyCode
    fn write_canonical_fields(&self, out: &mut String) {
        out.push_str(&format_amount(self.amount));
        out.push_str(&self.payment_number);
        out.push_str(&self.session_number);
        out.push_str(&self.currency_code);
    }

    fn supplied_signature(&self) -> &str {
        &self.signature
    }
}

impl CanonicalRequest for CreatePaymentRequest {
    // AccountNumber, AccountTypeCode, Amount, CurrencyCode, InvoiceNumber,
    // PaymentMethodCode, TerminalId, SessionNumber, UserFullName, UserId,
    // UserMsisdn
    fn write_canonical_fields(&self, out: &mut String) {
        out.push_str(&self.account_number);
        out.push_str(&self.account_type_code);
        out.push_str(&format_amount(self.amount));
        out.push_str(&self.currency_code);
        out.push_str(&self.invoice_number);
        out.push_str(&self.payment_method_code);
        let _ = write!(out, "{}", self.terminal_id);
        out.push_str(&self.session_number);
        out.push_str(&self.user_full_name);
        let _ = write!(out, "{}", self.user_id);
        let _ = write!(out, "{}", self.user_msisdn);
    }

    fn supplied_signature(&self) -> &str {
        &self.signature
    }
}

impl CanonicalRequest for PaymentStatusRequest {
    // Amount, SessionNumber
    fn write_canonical_fields(&self, out: &mut String) {
        out.push_str(&format_amount(self.amount));
        out.push_str(&self.session_number);
    }

    fn supplied_signature(&self) -> &str {
        &self.signature
    }
}
