//! Coverage type entity model, structure-type links, and DTOs.

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `coverage_types` table. The roof/covering material
/// option.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CoverageType {
    pub id: EntityId,
    pub product_line: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `coverage_type_structure_types` association table,
/// pairing a coverage type with a structure type it is compatible with.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct CoverageStructureLink {
    pub coverage_type_id: EntityId,
    pub structure_type_id: EntityId,
}

/// DTO for creating a new coverage type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCoverageType {
    pub product_line: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
