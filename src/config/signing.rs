//! Request signing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Signing configuration for inbound payment requests.
///
/// Holds the shared secret used to recompute request signatures. The secret
/// is symmetric: the payment processor appends the same value when signing
/// on its side, so the two deployments must be configured identically.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SigningConfig {
    /// Shared secret appended to every canonical string.
    ///
    /// May be left unset; requests then fail with a configuration error at
    /// verification time rather than at startup.
    #[serde(default)]
    pub secret_key: String,
}

impl SigningConfig {
    /// Validate signing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Whitespace-only secrets are configuration mistakes; empty is a
        // deliberate "not yet provisioned" state handled per request.
        if !self.secret_key.is_empty() && self.secret_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SIGNING_SECRET_KEY"));
        }
        Ok(())
    }
}
