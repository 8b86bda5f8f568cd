//! Route definitions for quote submission.
//!
//! Mounted at `/quotes` by `api_routes()`.
//!
//! ```text
//! POST /{line}                           submit
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Quote routes — mounted at `/quotes`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{line}", post(quotes::submit))
}
