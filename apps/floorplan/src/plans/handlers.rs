//! Axum route handlers for the Plan API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::layout::RoomType;
use crate::plans::generator::{generate_plan, PlanRequest, PlanResponse};
use crate::render::{SVG_FILE_NAME, SVG_MIME_TYPE};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub room_types: Vec<RoomType>,
    pub default_room_size: crate::layout::RoomSize,
}

/// POST /api/v1/plans
///
/// Full pipeline: rooms (list or extracted description) → placement → SVG.
/// Extraction failures never fail the request; they show up in `warnings`.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = generate_plan(&state, request).await?;
    Ok(Json(plan))
}

/// POST /api/v1/plans/svg
///
/// Same input as `/plans`; returns the SVG as a `floorplan.svg` download.
pub async fn handle_download_svg(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Response, AppError> {
    let plan = generate_plan(&state, request).await?;
    Ok((
        [
            (header::CONTENT_TYPE, SVG_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{SVG_FILE_NAME}\""),
            ),
        ],
        plan.svg,
    )
        .into_response())
}

/// GET /api/v1/catalog
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        room_types: state.catalog.room_types().to_vec(),
        default_room_size: crate::layout::room::DEFAULT_ROOM_SIZE,
    })
}
