use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::config::Config;
use crate::llm_client::{LlmClient, TextGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Absent when no Anthropic key is configured; analysis requests then fail
    /// with a configuration error.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Builds the state from configuration, wiring the Anthropic client when a key is set.
    pub fn from_config(config: Config) -> Result<Self> {
        let generator = match &config.anthropic_api_key {
            Some(key) => {
                let client = LlmClient::new(key.clone(), config.anthropic_api_url.clone())?;
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            None => {
                warn!("ANTHROPIC_API_KEY not set; analysis requests will fail until it is configured");
                None
            }
        };

        Ok(Self { config, generator })
    }
}
