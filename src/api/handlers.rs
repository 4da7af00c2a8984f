//! Relay API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use super::models::{error_codes, ApiError, GenerateRequest, GenerateResponse, StatusResponse};
use crate::context::{compose, ContextResolver};
use crate::inference::{InferenceClient, InferenceError};
use crate::metrics::METRICS;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ContextResolver>,
    pub inference: Arc<InferenceClient>,
    pub graph_name: String,
}

/// Service status
///
/// GET /
pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".to_string(),
        model: state.inference.model().to_string(),
        graph: state.graph_name.clone(),
    })
}

/// Ground a prompt in stored facts and forward it for generation
///
/// POST /generate
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ApiError>)> {
    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id);

    async move {
        let start = Instant::now();
        info!("Generate request: prompt_len={}", request.prompt.len());

        let context = state.resolver.resolve(&request.prompt).await;
        let context_used = !context.is_empty();
        let full_prompt = compose(&request.prompt, &context);

        match state.inference.generate(&full_prompt).await {
            Ok(response) => {
                METRICS.record_generate("success");
                info!(
                    "Generate complete: context_used={}, elapsed_ms={}",
                    context_used,
                    start.elapsed().as_millis()
                );
                Ok(Json(GenerateResponse {
                    response,
                    context_used,
                }))
            }
            Err(e) => {
                let (status, outcome, code, message) = match &e {
                    InferenceError::Unavailable(_) => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "unavailable",
                        error_codes::UPSTREAM_UNAVAILABLE,
                        "Inference server is not reachable".to_string(),
                    ),
                    InferenceError::UpstreamError(msg) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "upstream_error",
                        error_codes::UPSTREAM_ERROR,
                        format!("Inference server error: {}", msg),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal_error",
                        error_codes::INTERNAL_ERROR,
                        e.to_string(),
                    ),
                };
                METRICS.record_generate(outcome);
                error!("Generate failed with {}: {}", status, e);
                Err((status, Json(ApiError::new(code, message))))
            }
        }
    }
    .instrument(span)
    .await
}

/// Prometheus exposition
///
/// GET /metrics
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        METRICS.export_prometheus(),
    )
}
