pub mod catalog;
pub mod health;
pub mod quotes;
pub mod wizard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog/{line}/structure-types        structure types per line
/// /catalog/{line}/models                 models (?structure_type_id)
/// /catalog/{line}/coverage-types         coverage types (?structure_type_id, wood only)
/// /catalog/{line}/colors                 colors (?macro_category)
/// /catalog/{line}/surfaces               surfaces per line
/// /catalog/accessories                   accessories (wood)
/// /catalog/coverage-structure-links      raw compatibility pairs
///
/// /wizard/{line}/advance                 validate current step, move forward (POST)
/// /wizard/{line}/retreat                 move back one step (POST)
/// /wizard/{line}/validate                check current step, no transition (POST)
///
/// /quotes/{line}                         submit a completed configuration (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/wizard", wizard::router())
        .nest("/quotes", quotes::router())
}
