//! Color entity model and DTOs.

use altana_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `colors` table.
///
/// `macro_category` groups colors (e.g. RAL enamels vs. wood stains) so a
/// model offers only the relevant scope.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Color {
    pub id: EntityId,
    pub product_line: String,
    pub name: String,
    pub macro_category: Option<String>,
    pub hex_code: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new color.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateColor {
    pub product_line: String,
    pub name: String,
    pub macro_category: Option<String>,
    pub hex_code: Option<String>,
    pub image_url: Option<String>,
}
