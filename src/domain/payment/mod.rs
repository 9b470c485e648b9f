//! Payment request domain: records, canonicalization, signature verification.
//!
//! The signing scheme is the contract here. Each request kind concatenates a
//! fixed, hand-written sequence of its fields plus `.` and the shared
//! secret, hashes the result with SHA-256, and the caller ships that digest
//! as the `Signature` member. See [`canonical`] for the sequences and
//! [`signature`] for verification semantics.

pub mod canonical;
pub mod errors;
pub mod requests;
pub mod signature;

pub use canonical::{canonical_string, format_amount, CanonicalRequest};
pub use errors::{PaymentError, SignatureError};
pub use requests::{
    CreatePaymentRequest, ParamItem, PaymentRefundRequest, PaymentStatusRequest,
    PaymentWebhookRequest,
};
pub use signature::SignatureVerifier;
