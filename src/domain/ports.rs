use crate::error::RenderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Pixel dimensions requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSize {
    pub width: u32,
    pub height: u32,
}

impl RenderSize {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Default for RenderSize {
    fn default() -> Self {
        Self::square(250)
    }
}

/// A displayable code produced by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCode {
    pub media_type: String,
    pub size: RenderSize,
    pub data: Vec<u8>,
}

/// External collaborator that turns payload text into a scannable image.
///
/// The payload must be embedded byte for byte.
#[async_trait]
pub trait QrRenderer: Send + Sync {
    async fn render(&self, payload: &str, size: RenderSize) -> Result<RenderedCode, RenderError>;
}

pub type QrRendererBox = Box<dyn QrRenderer>;
