//! Route definitions for the wizard sequencer.
//!
//! Mounted at `/wizard` by `api_routes()`.
//!
//! ```text
//! POST /{line}/advance                   advance
//! POST /{line}/retreat                   retreat
//! POST /{line}/validate                  validate
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::wizard;
use crate::state::AppState;

/// Wizard routes — mounted at `/wizard`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{line}/advance", post(wizard::advance))
        .route("/{line}/retreat", post(wizard::retreat))
        .route("/{line}/validate", post(wizard::validate))
}
