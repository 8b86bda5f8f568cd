//! Metal-line quote record model and DTOs.

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `metal_quotes` table.
///
/// The structure type is persisted as a literal name and the structure
/// color as a nullable resolved catalog reference; `coverage_color_id` is
/// carried for schema parity but is never set by the configurator.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MetalQuote {
    pub id: EntityId,
    pub structure_type: String,
    pub model_id: EntityId,
    pub coverage_id: EntityId,
    pub structure_color_id: Option<EntityId>,
    pub coverage_color_id: Option<EntityId>,
    pub surface_id: Option<EntityId>,
    pub width_cm: i32,
    pub depth_cm: i32,
    pub height_cm: i32,
    pub package_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub contact_preference: Option<String>,
    pub total_price_cents: i64,
    pub status: String,
    /// Attached after submission by the back office, never by the
    /// configurator.
    pub reference_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new metal quote.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMetalQuote {
    pub structure_type: String,
    pub model_id: EntityId,
    pub coverage_id: EntityId,
    pub structure_color_id: Option<EntityId>,
    pub coverage_color_id: Option<EntityId>,
    pub surface_id: Option<EntityId>,
    pub width_cm: i32,
    pub depth_cm: i32,
    pub height_cm: i32,
    pub package_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub contact_preference: Option<String>,
    pub total_price_cents: i64,
}
