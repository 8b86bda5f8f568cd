//! Repository for the `structure_types` table.

use altana_core::types::EntityId;
use sqlx::PgPool;

use crate::models::structure_type::{CreateStructureType, StructureType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_line, name, description, image_url, created_at, updated_at";

/// Provides read and back-office write operations for structure types.
pub struct StructureTypeRepo;

impl StructureTypeRepo {
    /// Insert a new structure type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStructureType,
    ) -> Result<StructureType, sqlx::Error> {
        let query = format!(
            "INSERT INTO structure_types (product_line, name, description, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StructureType>(&query)
            .bind(&input.product_line)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a structure type by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<StructureType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM structure_types WHERE id = $1");
        sqlx::query_as::<_, StructureType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List structure types for a product line, ordered by name.
    pub async fn list_by_line(
        pool: &PgPool,
        product_line: &str,
    ) -> Result<Vec<StructureType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM structure_types
             WHERE product_line = $1
             ORDER BY name"
        );
        sqlx::query_as::<_, StructureType>(&query)
            .bind(product_line)
            .fetch_all(pool)
            .await
    }
}
