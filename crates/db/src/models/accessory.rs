//! Accessory entity model and DTOs (wood line).

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `accessories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Accessory {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new accessory.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccessory {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
