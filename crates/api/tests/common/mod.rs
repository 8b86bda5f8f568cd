//! Shared harness for the API integration tests.
//!
//! Builds the full application router through the same code path as
//! `main.rs` so tests exercise the production middleware stack (CORS,
//! request ID, timeout, tracing, panic recovery). Email delivery is left
//! unconfigured; submissions must succeed without it.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use altana_api::config::ServerConfig;
use altana_api::router::build_app_router;
use altana_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer: None,
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Response body is not JSON: {e}"))
}

// ---------------------------------------------------------------------------
// Catalog fixtures
// ---------------------------------------------------------------------------

use altana_core::types::EntityId;
use altana_db::models::color::CreateColor;
use altana_db::models::coverage_type::CreateCoverageType;
use altana_db::models::product_model::CreateProductModel;
use altana_db::models::structure_type::CreateStructureType;
use altana_db::models::surface::CreateSurface;
use altana_db::repositories::{
    ColorRepo, CoverageTypeRepo, ProductModelRepo, StructureTypeRepo, SurfaceRepo,
};

/// A minimal seeded catalog for one product line.
pub struct Catalog {
    pub structure_id: EntityId,
    pub other_structure_id: EntityId,
    pub model_id: EntityId,
    pub other_model_id: EntityId,
    pub coverage_id: EntityId,
    pub unlinked_coverage_id: EntityId,
    pub color_id: EntityId,
    pub surface_id: EntityId,
}

/// Seed two structure types (each with one model), two coverage types
/// (only the first linked to the first structure), one color, and one
/// surface for the given line.
pub async fn seed_catalog(pool: &PgPool, line: &str) -> Catalog {
    let structure = StructureTypeRepo::create(
        pool,
        &CreateStructureType {
            product_line: line.to_string(),
            name: "Freestanding".to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let other_structure = StructureTypeRepo::create(
        pool,
        &CreateStructureType {
            product_line: line.to_string(),
            name: "Attached".to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let model = ProductModelRepo::create(
        pool,
        &CreateProductModel {
            product_line: line.to_string(),
            structure_type_id: structure.id,
            name: "Lido".to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let other_model = ProductModelRepo::create(
        pool,
        &CreateProductModel {
            product_line: line.to_string(),
            structure_type_id: other_structure.id,
            name: "Riva".to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let coverage = CoverageTypeRepo::create(
        pool,
        &CreateCoverageType {
            product_line: line.to_string(),
            name: "Polycarbonate".to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let unlinked_coverage = CoverageTypeRepo::create(
        pool,
        &CreateCoverageType {
            product_line: line.to_string(),
            name: "Canvas".to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap();

    CoverageTypeRepo::link_structure_type(pool, coverage.id, structure.id)
        .await
        .unwrap();

    let color = ColorRepo::create(
        pool,
        &CreateColor {
            product_line: line.to_string(),
            name: "RAL 9005 Nero".to_string(),
            macro_category: Some("ral".to_string()),
            hex_code: Some("#0A0A0A".to_string()),
            image_url: None,
        },
    )
    .await
    .unwrap();

    let surface = SurfaceRepo::create(
        pool,
        &CreateSurface {
            product_line: line.to_string(),
            name: "Porcelain tile".to_string(),
            description: None,
            price_per_sqm_cents: Some(4_500),
            image_url: None,
        },
    )
    .await
    .unwrap();

    Catalog {
        structure_id: structure.id,
        other_structure_id: other_structure.id,
        model_id: model.id,
        other_model_id: other_model.id,
        coverage_id: coverage.id,
        unlinked_coverage_id: unlinked_coverage.id,
        color_id: color.id,
        surface_id: surface.id,
    }
}
