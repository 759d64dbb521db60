use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("TTS provider URL is not configured")]
    MissingProviderUrl,

    #[error("Provider returned status {status}")]
    Provider {
        status: u16,
        payload: serde_json::Value,
    },

    #[error("Failed to reach TTS provider: {0}")]
    ProviderUnreachable(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::MissingProviderUrl => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Server is not configured for text-to-speech".to_string(),
                None,
            ),
            AppError::Provider { status, payload } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "PROVIDER_ERROR",
                "Failed to process text-to-speech".to_string(),
                Some(payload),
            ),
            AppError::ProviderUnreachable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDER_UNREACHABLE",
                "An unexpected error occurred".to_string(),
                None,
            ),
            AppError::MalformedResponse(msg) => (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_RESPONSE",
                format!("Provider response was not usable: {}", msg),
                None,
            ),
        };

        tracing::error!("Request failed: {} - {}", code, message);

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
                details,
            }),
        )
            .into_response()
    }
}
