//! Structure type entity model and DTOs.

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `structure_types` table. The top-level structural
/// category (e.g. attached, freestanding) that gates which models are
/// offered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StructureType {
    pub id: EntityId,
    pub product_line: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new structure type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStructureType {
    pub product_line: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
