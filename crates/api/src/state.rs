use std::sync::Arc;

use altana_events::QuoteMailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: altana_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Quote email delivery; `None` when SMTP is not configured.
    pub mailer: Option<Arc<QuoteMailer>>,
}
