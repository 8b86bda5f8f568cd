//! Surface entity model and DTOs.

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `surfaces` table. Flooring/paving option priced per
/// unit area.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Surface {
    pub id: EntityId,
    pub product_line: String,
    pub name: String,
    pub description: Option<String>,
    /// Price per square meter in euro cents; display-only, no totals are
    /// computed from it.
    pub price_per_sqm_cents: Option<i64>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new surface.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSurface {
    pub product_line: String,
    pub name: String,
    pub description: Option<String>,
    pub price_per_sqm_cents: Option<i64>,
    pub image_url: Option<String>,
}
