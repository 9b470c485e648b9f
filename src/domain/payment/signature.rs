//! Request signature computation and verification.
//!
//! Signatures are the lowercase hex SHA-256 digest of a request's canonical
//! string (its signed fields followed by `.` and the shared secret). The
//! supplied signature may arrive in any case; verification decodes it to
//! bytes and compares digests in constant time, which makes the comparison
//! case-insensitive as a side effect.
//!
//! The canonical string embeds the shared secret, so it is never logged.
//! Diagnostics carry the signed fields and the two digests only.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::canonical::{canonical_string, CanonicalRequest};
use super::errors::SignatureError;

/// Verifier for signed payment requests.
pub struct SignatureVerifier {
    /// The shared secret appended to every canonical string.
    secret: String,
}

impl SignatureVerifier {
    /// Creates a new verifier with the given shared secret.
    ///
    /// An empty secret is accepted here; [`verify`](Self::verify) and
    /// [`sign`](Self::sign) reject it before touching any request data.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Computes the expected signature for a request.
    ///
    /// Returns the lowercase hex SHA-256 digest of the request's canonical
    /// string.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::MissingSecret` if the secret is empty; no
    /// canonicalization is attempted in that case.
    pub fn sign(&self, request: &impl CanonicalRequest) -> Result<String, SignatureError> {
        if self.secret.is_empty() {
            return Err(SignatureError::MissingSecret);
        }

        let canonical = canonical_string(&request.canonical_fields(), &self.secret);
        Ok(hex::encode(Sha256::digest(canonical.as_bytes())))
    }

    /// Verifies a request's supplied signature.
    ///
    /// # Verification Steps
    ///
    /// 1. Reject an empty secret before canonicalizing anything
    /// 2. Build the canonical string and compute its SHA-256 digest
    /// 3. Decode the supplied hex signature (any letter case)
    /// 4. Compare digest bytes using constant-time comparison
    ///
    /// A supplied signature that is not valid hex, or decodes to the wrong
    /// length, fails verification rather than erroring: it is untrusted
    /// input, not a system fault.
    pub fn verify(&self, request: &impl CanonicalRequest) -> Result<bool, SignatureError> {
        if self.secret.is_empty() {
            return Err(SignatureError::MissingSecret);
        }

        let fields = request.canonical_fields();
        let canonical = canonical_string(&fields, &self.secret);
        let computed = Sha256::digest(canonical.as_bytes());

        let received = request.supplied_signature();
        tracing::debug!(
            canonical_data = %fields,
            computed_digest = %hex::encode(computed),
            received_digest = %received,
            "Signature check"
        );

        let supplied = match hex::decode(received) {
            Ok(bytes) => bytes,
            Err(_) => return Ok(false),
        };

        Ok(constant_time_compare(computed.as_slice(), &supplied))
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// This prevents timing attacks that could leak information about the
/// expected digest.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
