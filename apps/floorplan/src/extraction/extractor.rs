//! Room extractor — pluggable backends that turn a description into `Name: WxH` text.

use async_trait::async_trait;

use crate::extraction::prompts::{build_extract_prompt, EXTRACT_SYSTEM};
use crate::extraction::FALLBACK_ROOM_LINES;
use crate::llm_client::prompts::PLAIN_LINES_ONLY;
use crate::llm_client::{LlmClient, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The extraction backend. Implement this to swap backends without touching
/// the handler or the plan generator.
///
/// Carried in `AppState` as `Arc<dyn RoomExtractor>`.
#[async_trait]
pub trait RoomExtractor: Send + Sync {
    /// True for backends that never consult a model (demo mode).
    fn is_fallback(&self) -> bool {
        false
    }

    /// Returns newline-separated `Name: WxH` text. Errors never reach a
    /// handler: `extract_rooms` turns them into the sample-list fallback.
    async fn extract(&self, description: &str) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRoomExtractor — default when an API key is configured
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmRoomExtractor {
    llm: LlmClient,
    system: String,
}

impl LlmRoomExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: format!("{EXTRACT_SYSTEM}\n\n{PLAIN_LINES_ONLY}"),
        }
    }
}

#[async_trait]
impl RoomExtractor for LlmRoomExtractor {
    async fn extract(&self, description: &str) -> Result<String, LlmError> {
        let prompt = build_extract_prompt(description);
        self.llm.call_text(&prompt, &self.system).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackExtractor — demo mode, no API key
// ────────────────────────────────────────────────────────────────────────────

/// Always answers with the sample room list.
pub struct FallbackExtractor;

#[async_trait]
impl RoomExtractor for FallbackExtractor {
    fn is_fallback(&self) -> bool {
        true
    }

    async fn extract(&self, _description: &str) -> Result<String, LlmError> {
        Ok(FALLBACK_ROOM_LINES.join("\n"))
    }
}
