//! Plan generator — the request pipeline behind both plan endpoints.
//!
//! 1. Gather rooms: explicit comma list, else LLM extraction of the description.
//! 2. Place them (nominal or seeded sampled sizes, chosen strategy).
//! 3. Render the SVG.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_rooms, parse_room_list, Extraction, RoomSource};
use crate::layout::{
    place, place_sampled, Bounds, Layout, PlacementOptions, RoomInstance, Strategy,
};
use crate::render::{render_svg, RenderOptions};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
    /// Free-text building description, sent to the extractor.
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-separated room list. Takes precedence over `description`.
    #[serde(default)]
    pub rooms: Option<String>,
    #[serde(default)]
    pub strategy: Strategy,
    pub max_row_width: Option<f64>,
    pub scale: Option<f64>,
    #[serde(default)]
    pub zone_order: bool,
    /// Sample room sizes from the catalog ranges instead of nominal sizes.
    #[serde(default)]
    pub randomize_sizes: bool,
    /// Seed for `randomize_sizes`; a random one is drawn (and returned) when absent.
    pub seed: Option<u64>,
    #[serde(default = "default_true")]
    pub show_dimensions: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub layout_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: RoomSource,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub rooms: Vec<RoomInstance>,
    pub bounds: Bounds,
    pub total_area: f64,
    pub scale: f64,
    pub svg: String,
    pub warnings: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_plan(state: &AppState, request: PlanRequest) -> Result<PlanResponse, AppError> {
    let max_row_width = positive_option(
        "max_row_width",
        request.max_row_width,
        state.config.max_row_width,
    )?;
    let scale = positive_option("scale", request.scale, state.config.default_scale)?;

    let Extraction {
        rooms,
        source,
        mut warnings,
    } = gather_rooms(state, &request).await?;

    if rooms.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No valid rooms found in the input. {}",
            warnings.join(" ")
        )
        .trim_end()
        .to_string()));
    }

    let options = PlacementOptions {
        max_row_width,
        strategy: request.strategy,
        zone_order: request.zone_order,
        ..PlacementOptions::default()
    };

    let (layout, seed) = if request.randomize_sizes {
        let seed = request.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        (
            place_sampled(&rooms, &options, &state.catalog, &mut rng),
            Some(seed),
        )
    } else {
        (place(&rooms, &options, &state.catalog), None)
    };

    warnings.extend(oversize_warnings(&layout, max_row_width));

    let svg = render_svg(
        &layout,
        &RenderOptions {
            scale,
            show_dimensions: request.show_dimensions,
            ..RenderOptions::default()
        },
    );

    let layout_id = Uuid::new_v4();
    info!(
        %layout_id,
        rooms = layout.len(),
        source = ?source,
        strategy = ?request.strategy,
        warnings = warnings.len(),
        "Floor plan generated"
    );

    Ok(PlanResponse {
        layout_id,
        generated_at: Utc::now(),
        source,
        strategy: request.strategy,
        seed,
        bounds: layout.bounds(),
        total_area: layout.total_area(),
        rooms: layout.rooms,
        scale,
        svg,
        warnings,
    })
}

async fn gather_rooms(state: &AppState, request: &PlanRequest) -> Result<Extraction, AppError> {
    if let Some(list) = non_blank(request.rooms.as_deref()) {
        let parsed = parse_room_list(list);
        return Ok(Extraction {
            warnings: parsed.warnings(),
            rooms: parsed.rooms,
            source: RoomSource::RoomList,
        });
    }

    if let Some(description) = non_blank(request.description.as_deref()) {
        let timeout = Duration::from_secs(state.config.llm_timeout_secs);
        return Ok(extract_rooms(state.extractor.as_ref(), description, timeout).await);
    }

    Err(AppError::Validation(
        "Please describe your building or enter a comma-separated list of rooms.".to_string(),
    ))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn positive_option(field: &str, value: Option<f64>, default: f64) -> Result<f64, AppError> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => Err(AppError::Validation(format!(
            "{field} must be a positive number, got {v}"
        ))),
    }
}

/// Rooms that end past `max_row_width`: rooms wider than a whole row, and
/// adjacency groups whose combined width overflows (groups are never split).
fn oversize_warnings(layout: &Layout, max_row_width: f64) -> Vec<String> {
    layout
        .iter()
        .filter(|r| r.right() > max_row_width)
        .map(|r| {
            format!(
                "'{}' ends at {}m, past the {}m row width.",
                r.name,
                r.right(),
                max_row_width
            )
        })
        .collect()
}
