//! Data transfer objects for the payment HTTP API.
//!
//! The inbound request bodies deserialize directly into the domain request
//! records (their serde attributes carry the wire contract); this module
//! holds the response shapes.

use serde::{Deserialize, Serialize};

/// Standard error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_code_and_message() {
        let response = ErrorResponse::new("INVALID_SIGNATURE", "Invalid request signature");
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("INVALID_SIGNATURE"));
        assert!(json.contains("Invalid request signature"));
    }
}
