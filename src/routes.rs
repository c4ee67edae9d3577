use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResponse};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let api_prefix = state
        .config
        .system_config
        .api_prefix
        .trim_end_matches('/')
        .to_string();

    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route(&format!("{}/translate", api_prefix), post(translate_text))
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Welcome to TranslatorAI API"}))
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Rejects malformed requests before any outbound call is made
fn validate(request: &TranslationRequest) -> Result<(), ServiceError> {
    if request.text.trim().is_empty() {
        return Err(ServiceError::Validation("Text cannot be empty".to_string()));
    }
    if request.target_languages.is_empty() {
        return Err(ServiceError::Validation(
            "At least one target language is required".to_string(),
        ));
    }
    Ok(())
}

fn error_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    (err.status_code(), Json(json!({"detail": err.to_string()})))
}

/// Per-target failures stay inside the 200 response body; only validation
/// and batch-level failures change the status code.
async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, (StatusCode, Json<Value>)> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] Translate request with {} target language(s)",
        request_id,
        request.target_languages.len()
    );

    validate(&request).map_err(error_response)?;

    match state
        .orchestrator
        .translate_batch(&request.text, &request.target_languages)
        .await
    {
        Ok(translations) => Ok(Json(TranslationResponse { translations })),
        Err(e) => {
            error!("[{}] Batch translation failed: {}", request_id, e);
            Err(error_response(e))
        }
    }
}
