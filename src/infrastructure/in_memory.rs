use crate::domain::ports::{QrRenderer, RenderSize, RenderedCode};
use crate::error::RenderError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory renderer that records every payload it receives.
///
/// It returns the payload bytes as a `text/plain` image, or a fixed error when
/// built with [`RecordingRenderer::failing`]. Clones share the same record.
/// Ideal for testing code that depends on the rendering port.
#[derive(Default, Clone)]
pub struct RecordingRenderer {
    payloads: Arc<RwLock<Vec<String>>>,
    failure: Option<String>,
}

impl RecordingRenderer {
    /// Creates a renderer that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that records the payload and then fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            payloads: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// Payloads received so far, oldest first.
    pub async fn payloads(&self) -> Vec<String> {
        self.payloads.read().await.clone()
    }
}

#[async_trait]
impl QrRenderer for RecordingRenderer {
    async fn render(&self, payload: &str, size: RenderSize) -> Result<RenderedCode, RenderError> {
        self.payloads.write().await.push(payload.to_string());

        match &self.failure {
            Some(message) => Err(RenderError::new(message.clone())),
            None => Ok(RenderedCode {
                media_type: "text/plain".to_string(),
                size,
                data: payload.as_bytes().to_vec(),
            }),
        }
    }
}
