use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[serde(default)]
    pub access_code: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
}

/// With no code configured the gate is open.
pub fn check_access_code(configured: Option<&str>, submitted: &str) -> Result<(), AppError> {
    match configured {
        None => Ok(()),
        Some(code) if code == submitted => Ok(()),
        Some(_) => Err(AppError::InvalidAccessCode),
    }
}

/// POST /api/verify
pub async fn handle_verify(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<VerifyResponse>, AppError> {
    let request: VerifyRequest = serde_json::from_slice(&body).unwrap_or_default();

    check_access_code(state.config.access_code.as_deref(), &request.access_code)?;

    Ok(Json(VerifyResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_when_unconfigured() {
        assert!(check_access_code(None, "").is_ok());
        assert!(check_access_code(None, "anything").is_ok());
    }

    #[test]
    fn test_matching_code_passes() {
        assert!(check_access_code(Some("pearson-2025"), "pearson-2025").is_ok());
    }

    #[test]
    fn test_wrong_or_empty_code_fails() {
        assert!(matches!(
            check_access_code(Some("pearson-2025"), "guess"),
            Err(AppError::InvalidAccessCode)
        ));
        assert!(matches!(
            check_access_code(Some("pearson-2025"), ""),
            Err(AppError::InvalidAccessCode)
        ));
    }

    #[test]
    fn test_request_defaults_to_empty_code() {
        let req: VerifyRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.access_code, "");
        let req: VerifyRequest = serde_json::from_str(r#"{"accessCode": "abc"}"#).unwrap();
        assert_eq!(req.access_code, "abc");
    }
}
