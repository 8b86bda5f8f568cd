//! The two independent configurator product lines.
//!
//! Every catalog entity and every persisted quote belongs to exactly one
//! line. The line is fixed for the lifetime of a wizard session and drives
//! which step table, which candidate sets, and which persisted record
//! shape apply.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Product line discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductLine {
    /// Metal/aluminum structures.
    Metal,
    /// Wood structures.
    Wood,
}

impl ProductLine {
    /// Parse a product line string from the database or a URL path segment.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "metal" => Ok(Self::Metal),
            "wood" => Ok(Self::Wood),
            _ => Err(CoreError::Validation(format!(
                "Invalid product line '{s}'. Must be one of: metal, wood"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metal => "metal",
            Self::Wood => "wood",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
