use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{ "error": <message> }`; internal detail is logged,
/// never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid profile text")]
    InvalidProfileText,

    #[error("Invalid access code")]
    InvalidAccessCode,

    #[error("Upstream authentication failed")]
    UpstreamAuth,

    #[error("Upstream rate limited")]
    UpstreamBusy,

    #[error("Upstream unavailable (status {0})")]
    UpstreamUnavailable(u16),

    #[error("No JSON object in model output")]
    UnparsableOutput,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status: 401, .. } => AppError::UpstreamAuth,
            LlmError::Api { status: 429, .. } => AppError::UpstreamBusy,
            LlmError::Api { status, .. } => AppError::UpstreamUnavailable(status),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            AppError::Configuration(detail) => {
                tracing::error!("{detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error",
                )
            }
            AppError::InvalidProfileText => (
                StatusCode::BAD_REQUEST,
                "Invalid profile text. Please ensure you uploaded a valid LinkedIn profile PDF.",
            ),
            AppError::InvalidAccessCode => (StatusCode::UNAUTHORIZED, "Invalid access code."),
            AppError::UpstreamAuth => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "API authentication failed. Please contact support.",
            ),
            AppError::UpstreamBusy => (
                StatusCode::TOO_MANY_REQUESTS,
                "Service is busy. Please try again in a moment.",
            ),
            AppError::UpstreamUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Analysis service temporarily unavailable. Please try again.",
            ),
            AppError::UnparsableOutput => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not parse analysis results. Please try again.",
            ),
            AppError::Internal(e) => {
                tracing::error!("Analysis error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred during analysis. Please try again.",
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
