//! Request and response bodies for the relay API

use serde::{Deserialize, Serialize};

/// `POST /generate` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// `POST /generate` reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    pub context_used: bool,
}

/// `GET /` reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub model: String,
    pub graph: String,
}

/// API error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

pub mod error_codes {
    pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_response_shape() {
        let body = serde_json::to_value(GenerateResponse {
            response: "Hi!".to_string(),
            context_used: true,
        })
        .unwrap();

        assert_eq!(body, json!({"response": "Hi!", "context_used": true}));
    }

    #[test]
    fn test_generate_request_requires_prompt() {
        assert!(serde_json::from_str::<GenerateRequest>("{}").is_err());
        let req: GenerateRequest = serde_json::from_str(r#"{"prompt":"hey"}"#).unwrap();
        assert_eq!(req.prompt, "hey");
    }
}
