//! In-memory `TextGenerator` for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Status(u16),
    Empty,
}

/// Replays a fixed reply and counts how often it was asked.
#[derive(Debug)]
pub struct StubGenerator {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: std::sync::Mutex<Option<String>>,
}

impl StubGenerator {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: std::sync::Mutex::new(None),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Status(status) => Err(LlmError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
            StubReply::Empty => Err(LlmError::EmptyContent),
        }
    }
}
