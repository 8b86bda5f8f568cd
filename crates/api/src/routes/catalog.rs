//! Route definitions for the read-only catalog.
//!
//! Mounted at `/catalog` by `api_routes()`.
//!
//! ```text
//! GET /{line}/structure-types            list_structure_types
//! GET /{line}/models                     list_models (?structure_type_id)
//! GET /{line}/coverage-types             list_coverage_types (?structure_type_id)
//! GET /{line}/colors                     list_colors (?macro_category)
//! GET /{line}/surfaces                   list_surfaces
//! GET /accessories                       list_accessories
//! GET /coverage-structure-links          list_coverage_structure_links
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes — mounted at `/catalog`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/accessories", get(catalog::list_accessories))
        .route(
            "/coverage-structure-links",
            get(catalog::list_coverage_structure_links),
        )
        .route(
            "/{line}/structure-types",
            get(catalog::list_structure_types),
        )
        .route("/{line}/models", get(catalog::list_models))
        .route("/{line}/coverage-types", get(catalog::list_coverage_types))
        .route("/{line}/colors", get(catalog::list_colors))
        .route("/{line}/surfaces", get(catalog::list_surfaces))
}
