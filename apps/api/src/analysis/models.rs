use serde::{Deserialize, Serialize};

/// Inbound body of `POST /api/analyze`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub profile_text: Option<String>,
}

/// Expected shape of the model's answer.
///
/// Only used to flag deviations in the logs; the handler returns the model's
/// object as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub profile_summary: ProfileSummary,
    pub diagnose: Pillar,
    pub embed: Pillar,
    pub evaluate: Pillar,
    pub prioritize: Pillar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: String,
    pub current_role: String,
    pub industry: String,
    pub experience: String,
}

/// One of the four D.E.E.P. pillars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pillar {
    pub summary: String,
    /// 2-3 items.
    pub recommendations: Vec<String>,
}
