//! Product model entity model and DTOs.

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_models` table. A specific product design
/// within a structure type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductModel {
    pub id: EntityId,
    pub product_line: String,
    pub structure_type_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product model.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductModel {
    pub product_line: String,
    pub structure_type_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
