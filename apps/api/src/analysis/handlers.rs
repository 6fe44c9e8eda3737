//! Axum route handlers for the Analysis API.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::analysis::analyzer::{analyze_profile, parse_profile_text};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze
///
/// Body: `{ "profileText": string }`. Returns the model's D.E.E.P. analysis object.
/// The credential check runs before the body is looked at.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let generator = state.generator.as_ref().ok_or_else(|| {
        AppError::Configuration("ANTHROPIC_API_KEY environment variable not set".to_string())
    })?;

    let profile_text = parse_profile_text(&body)?;

    let analysis = analyze_profile(&profile_text, generator.as_ref()).await?;

    Ok(Json(analysis))
}
