mod config;
mod errors;
mod extraction;
mod layout;
mod llm_client;
mod plans;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{FallbackExtractor, LlmRoomExtractor, RoomExtractor};
use crate::layout::RoomCatalog;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting floorplan v{}", env!("CARGO_PKG_VERSION"));

    let extractor = build_extractor(&config)?;

    let catalog = Arc::new(RoomCatalog::standard());
    info!(
        room_types = catalog.room_types().len(),
        max_row_width = config.max_row_width,
        scale = config.default_scale,
        "Room catalog loaded"
    );

    let state = AppState {
        config: config.clone(),
        catalog,
        extractor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// LLM-backed extractor when a key is configured, sample-list extractor otherwise.
fn build_extractor(config: &Config) -> Result<Arc<dyn RoomExtractor>> {
    match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.llm_model.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            )?;
            info!("LLM client initialized (model: {})", llm.model());
            Ok(Arc::new(LlmRoomExtractor::new(llm)))
        }
        None => {
            warn!("OPENAI_API_KEY not set; running in demo mode with sample rooms");
            Ok(Arc::new(FallbackExtractor))
        }
    }
}
