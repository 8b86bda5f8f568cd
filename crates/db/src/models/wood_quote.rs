//! Wood-line quote record model and DTOs.

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wood_quotes` table.
///
/// All selections are catalog references; `surface_id` is NOT NULL by
/// schema.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WoodQuote {
    pub id: EntityId,
    pub structure_type_id: EntityId,
    pub model_id: EntityId,
    pub coverage_id: EntityId,
    pub color_id: EntityId,
    pub surface_id: EntityId,
    pub accessory_ids: Vec<EntityId>,
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
    pub privacy_accepted: bool,
    pub total_price_cents: i64,
    pub status: String,
    /// Attached after submission by the back office, never by the
    /// configurator.
    pub reference_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new wood quote.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWoodQuote {
    pub structure_type_id: EntityId,
    pub model_id: EntityId,
    pub coverage_id: EntityId,
    pub color_id: EntityId,
    pub surface_id: EntityId,
    pub accessory_ids: Vec<EntityId>,
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
    pub privacy_accepted: bool,
    pub total_price_cents: i64,
}
