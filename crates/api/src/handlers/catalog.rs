//! Handlers for the read-only catalog endpoints.
//!
//! Each endpoint returns the candidate set for one wizard step, narrowed
//! by the upstream selection passed as a query parameter. With no
//! upstream parameter the full per-line set is returned, so early steps
//! always have something to display.

use altana_core::availability::{self, CompatibilityLink};
use altana_core::product_line::ProductLine;
use altana_core::types::EntityId;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use altana_db::repositories::{
    AccessoryRepo, ColorRepo, CoverageTypeRepo, ProductModelRepo, StructureTypeRepo, SurfaceRepo,
};

use crate::error::AppResult;
use crate::handlers::parse_line;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Upstream narrowing parameter for model and coverage listings.
#[derive(Debug, Deserialize)]
pub struct StructureScopedParams {
    pub structure_type_id: Option<EntityId>,
}

/// Macro-category scope for color listings.
#[derive(Debug, Deserialize)]
pub struct ColorParams {
    pub macro_category: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /catalog/{line}/structure-types
// ---------------------------------------------------------------------------

/// List the structure types of a product line.
pub async fn list_structure_types(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;
    let items = StructureTypeRepo::list_by_line(&state.pool, line.as_str()).await?;

    tracing::debug!(count = items.len(), line = line.as_str(), "Listed structure types");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /catalog/{line}/models
// ---------------------------------------------------------------------------

/// List the models of a product line, narrowed to the chosen structure
/// type when one is passed.
pub async fn list_models(
    State(state): State<AppState>,
    Path(line): Path<String>,
    Query(params): Query<StructureScopedParams>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;
    let models = ProductModelRepo::list_by_line(&state.pool, line.as_str()).await?;
    let models =
        availability::filter_by_reference(models, params.structure_type_id, |m| m.structure_type_id);

    tracing::debug!(count = models.len(), line = line.as_str(), "Listed models");
    Ok(Json(DataResponse { data: models }))
}

// ---------------------------------------------------------------------------
// GET /catalog/{line}/coverage-types
// ---------------------------------------------------------------------------

/// List the coverage types of a product line.
///
/// The wood line narrows by the structure-type compatibility links; the
/// metal line offers its full set regardless of the chosen structure.
pub async fn list_coverage_types(
    State(state): State<AppState>,
    Path(line): Path<String>,
    Query(params): Query<StructureScopedParams>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;
    let coverages = CoverageTypeRepo::list_by_line(&state.pool, line.as_str()).await?;

    let coverages = match line {
        ProductLine::Wood => {
            let links: Vec<CompatibilityLink> = CoverageTypeRepo::list_links(&state.pool)
                .await?
                .into_iter()
                .map(|l| CompatibilityLink {
                    option_id: l.coverage_type_id,
                    upstream_id: l.structure_type_id,
                })
                .collect();
            availability::filter_by_links(coverages, params.structure_type_id, &links, |c| c.id)
        }
        ProductLine::Metal => coverages,
    };

    tracing::debug!(count = coverages.len(), line = line.as_str(), "Listed coverage types");
    Ok(Json(DataResponse { data: coverages }))
}

// ---------------------------------------------------------------------------
// GET /catalog/{line}/colors
// ---------------------------------------------------------------------------

/// List the colors of a product line, optionally scoped to one macro
/// category (e.g. RAL enamels vs. wood stains).
pub async fn list_colors(
    State(state): State<AppState>,
    Path(line): Path<String>,
    Query(params): Query<ColorParams>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;
    let items =
        ColorRepo::list_by_line(&state.pool, line.as_str(), params.macro_category.as_deref())
            .await?;

    tracing::debug!(count = items.len(), line = line.as_str(), "Listed colors");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /catalog/{line}/surfaces
// ---------------------------------------------------------------------------

/// List the surfaces of a product line.
pub async fn list_surfaces(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;
    let items = SurfaceRepo::list_by_line(&state.pool, line.as_str()).await?;

    tracing::debug!(count = items.len(), line = line.as_str(), "Listed surfaces");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /catalog/accessories
// ---------------------------------------------------------------------------

/// List all accessories (wood line only has them).
pub async fn list_accessories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = AccessoryRepo::list(&state.pool).await?;

    tracing::debug!(count = items.len(), "Listed accessories");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /catalog/coverage-structure-links
// ---------------------------------------------------------------------------

/// List the raw coverage ↔ structure compatibility pairs.
pub async fn list_coverage_structure_links(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = CoverageTypeRepo::list_links(&state.pool).await?;

    tracing::debug!(count = items.len(), "Listed coverage-structure links");
    Ok(Json(DataResponse { data: items }))
}
