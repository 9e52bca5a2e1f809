//! Text-to-room-list extraction.
//!
//! A free-text description goes to a [`RoomExtractor`] under a timeout. The
//! call is all-or-nothing: on error or timeout any partial result is dropped
//! and the fixed sample list is used instead, with a warning for the user.

pub mod extractor;
pub mod parser;
pub mod prompts;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use crate::layout::RoomSpec;

pub use extractor::{FallbackExtractor, LlmRoomExtractor, RoomExtractor};
pub use parser::{parse_room_lines, parse_room_list};

/// Sample rooms used in demo mode and whenever extraction fails.
pub const FALLBACK_ROOM_LINES: &[&str] = &[
    "Living Room: 6x5",
    "Kitchen: 4x3",
    "Bedroom 1: 4x4",
    "Bedroom 2: 4x3",
    "Toilet: 2x2",
];

/// Where the rooms of a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomSource {
    Llm,
    Fallback,
    RoomList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub rooms: Vec<RoomSpec>,
    pub source: RoomSource,
    pub warnings: Vec<String>,
}

pub fn fallback_rooms() -> Vec<RoomSpec> {
    parse_room_lines(&FALLBACK_ROOM_LINES.join("\n")).rooms
}

fn fallback_extraction(warning: String) -> Extraction {
    Extraction {
        rooms: fallback_rooms(),
        source: RoomSource::Fallback,
        warnings: vec![warning],
    }
}

/// Runs the extractor with a time bound and parses its reply.
///
/// Never fails: extractor errors, timeouts and replies with no usable lines
/// all degrade to the sample room list.
pub async fn extract_rooms(
    extractor: &dyn RoomExtractor,
    description: &str,
    timeout: Duration,
) -> Extraction {
    let text = match tokio::time::timeout(timeout, extractor.extract(description)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(error = %e, "Room extraction failed, using sample rooms");
            return fallback_extraction(format!(
                "Could not reach the room extraction service; showing a sample layout. ({e})"
            ));
        }
        Err(_) => {
            warn!(timeout_secs = timeout.as_secs_f64(), "Room extraction timed out, using sample rooms");
            return fallback_extraction(format!(
                "Room extraction timed out after {}s; showing a sample layout.",
                timeout.as_secs_f64()
            ));
        }
    };

    let parsed = parse_room_lines(&text);
    if parsed.rooms.is_empty() {
        warn!(skipped = parsed.skipped.len(), "LLM reply contained no room lines");
        let mut extraction = fallback_extraction(
            "No rooms could be read from the description; showing a sample layout.".to_string(),
        );
        extraction.warnings.extend(parsed.warnings());
        return extraction;
    }

    if extractor.is_fallback() {
        return Extraction {
            rooms: parsed.rooms,
            source: RoomSource::Fallback,
            warnings: vec![
                "Running in demo mode (no LLM configured); showing a sample layout.".to_string(),
            ],
        };
    }

    info!(
        rooms = parsed.rooms.len(),
        skipped = parsed.skipped.len(),
        "Rooms extracted from description"
    );

    Extraction {
        warnings: parsed.warnings(),
        rooms: parsed.rooms,
        source: RoomSource::Llm,
    }
}
