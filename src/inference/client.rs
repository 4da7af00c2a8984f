//! Ollama-compatible generation client

use crate::config::InferenceConfig;
use crate::metrics::METRICS;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Inference error types
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Inference server unavailable: {0}")]
    Unavailable(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Non-streaming `/api/generate` reply; only `response` is read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

/// Client for the inference server
pub struct InferenceClient {
    http: Client,
    config: InferenceConfig,
}

impl InferenceClient {
    /// Create a new inference client
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| InferenceError::RequestFailed(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate a completion for `prompt`, returning the trimmed text
    pub async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let timer = METRICS.inference_duration.start_timer();
        let result = self.call_generate_api(prompt).await;
        timer.observe_duration();

        if let Err(e) = &result {
            METRICS.inference_failures.inc();
            error!("Inference call failed: {}", e);
        }
        result
    }

    async fn call_generate_api(&self, prompt: &str) -> Result<String, InferenceError> {
        let url = self.config.generate_url();
        let body = GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        debug!("Calling generate API: model={}, prompt_len={}", body.model, prompt.len());

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    InferenceError::Unavailable(e.to_string())
                } else if e.is_timeout() {
                    InferenceError::Timeout(e.to_string())
                } else {
                    InferenceError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InferenceError::UpstreamError(format!(
                "Status {}: {}",
                status, error_text
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        Ok(generated.response.trim().to_string())
    }
}
