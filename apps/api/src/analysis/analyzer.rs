//! Profile analyzer: validates the submitted text, asks the model, and pulls
//! the JSON object out of its answer.

use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::llm_client::{extract_json_object, TextGenerator};

/// Minimum length, in characters after trimming, of a usable profile text.
pub const MIN_PROFILE_TEXT_CHARS: usize = 100;

/// Reads `profileText` out of a raw request body.
///
/// A body that is not JSON, or whose `profileText` is missing, not a string or
/// too short, is rejected the same way.
pub fn parse_profile_text(body: &[u8]) -> Result<String, AppError> {
    let request: AnalysisRequest = serde_json::from_slice(body).unwrap_or_default();

    match request.profile_text {
        Some(text) if text.trim().chars().count() >= MIN_PROFILE_TEXT_CHARS => Ok(text),
        _ => Err(AppError::InvalidProfileText),
    }
}

/// Runs one analysis round-trip and returns the model's JSON object untouched.
pub async fn analyze_profile(
    profile_text: &str,
    generator: &dyn TextGenerator,
) -> Result<Value, AppError> {
    let prompt = build_analysis_prompt(profile_text);
    let output = generator.generate(&prompt).await?;

    let json_text = extract_json_object(&output).ok_or(AppError::UnparsableOutput)?;
    let analysis: Value = serde_json::from_str(json_text)?;

    match serde_json::from_value::<AnalysisResult>(analysis.clone()) {
        Ok(result) => info!(
            "Analysis complete for role '{}'",
            result.profile_summary.current_role
        ),
        Err(e) => warn!("Analysis result deviates from expected shape: {e}"),
    }

    Ok(analysis)
}
