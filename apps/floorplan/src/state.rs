use std::sync::Arc;

use crate::config::Config;
use crate::extraction::RoomExtractor;
use crate::layout::RoomCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; each request builds its own Layout.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<RoomCatalog>,
    /// Pluggable extractor. LLM-backed when an API key is configured, sample list otherwise.
    pub extractor: Arc<dyn RoomExtractor>,
}
