use axum::{extract::State, Json};
use std::sync::Arc;

use super::{ConvertRequest, ConvertResponse, HealthResponse};
use crate::api::routes::AppState;
use crate::error::AppError;

pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    // Validate input
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".into()));
    }

    if request.text.len() > 10000 {
        return Err(AppError::BadRequest(
            "Text too long (max 10000 chars)".into(),
        ));
    }

    // Forward to the provider and normalize its response
    let payload = state.tts.convert(&request.text).await?;

    Ok(Json(ConvertResponse {
        file_url: payload.data_url(),
        filename: payload.filename,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
