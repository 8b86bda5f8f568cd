//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod accessory;
pub mod color;
pub mod coverage_type;
pub mod metal_quote;
pub mod product_model;
pub mod structure_type;
pub mod surface;
pub mod wood_quote;
