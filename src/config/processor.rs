//! Upstream payment processor configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upstream payment processor configuration.
///
/// Creation and status-check requests that pass signature verification are
/// forwarded to this API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessorConfig {
    /// Base URL of the processor API (e.g. `https://pay.example.com`).
    #[serde(default)]
    pub base_url: String,

    /// API key sent with every forwarded request.
    ///
    /// May be left unset; forwarding requests then fail with a configuration
    /// error rather than preventing startup of the notification endpoints.
    #[serde(default)]
    pub api_key: String,

    /// Timeout for upstream calls in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProcessorConfig {
    /// Validate processor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.is_empty()
            && !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidProcessorUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidProcessorTimeout);
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    15
}
