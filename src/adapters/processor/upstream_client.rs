//! Upstream payment processor adapter.
//!
//! Implements the `PaymentProcessor` port over the processor's JSON HTTP
//! API. The API key travels as a base64-encoded `X-Api-Key` header set on
//! each request builder; the shared `reqwest::Client` itself carries no
//! credentials, so concurrent requests cannot observe each other's key.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::ProcessorConfig;
use crate::domain::payment::{CreatePaymentRequest, PaymentStatusRequest};
use crate::ports::{PaymentProcessor, ProcessorError, ProcessorResponse};

/// Header carrying the base64-encoded processor API key.
const API_KEY_HEADER: &str = "X-Api-Key";

/// Payment processor adapter over the upstream HTTP API.
pub struct UpstreamProcessorClient {
    base_url: String,
    api_key: Option<SecretString>,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl UpstreamProcessorClient {
    /// Create a new client from processor configuration.
    pub fn new(config: &ProcessorConfig) -> Self {
        let api_key = if config.api_key.is_empty() {
            None
        } else {
            Some(SecretString::new(config.api_key.clone()))
        };

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(config.timeout_secs),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// The `X-Api-Key` header value for one request.
    fn api_key_header(&self) -> Result<String, ProcessorError> {
        let key = self
            .api_key
            .as_ref()
            .ok_or(ProcessorError::MissingConfiguration("PROCESSOR_API_KEY"))?;
        Ok(BASE64.encode(key.expose_secret().as_bytes()))
    }

    /// POST a body to the processor and parse the response envelope.
    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ProcessorResponse, ProcessorError> {
        if self.base_url.is_empty() {
            return Err(ProcessorError::MissingConfiguration("PROCESSOR_BASE_URL"));
        }

        let url = format!("{}{}", self.base_url, path);
        let api_key = self.api_key_header()?;

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| ProcessorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                url = %url,
                body = %body,
                "Processor rejected request"
            );
            return Err(ProcessorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProcessorError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl PaymentProcessor for UpstreamProcessorClient {
    async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<ProcessorResponse, ProcessorError> {
        self.post("/api/payment/create", request).await
    }

    async fn check_status(
        &self,
        request: &PaymentStatusRequest,
    ) -> Result<ProcessorResponse, ProcessorError> {
        self.post("/api/payment/status", request).await
    }
}
