//! Repository for the `coverage_types` table and its structure-type links.

use altana_core::types::EntityId;
use sqlx::PgPool;

use crate::models::coverage_type::{CoverageStructureLink, CoverageType, CreateCoverageType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_line, name, description, image_url, created_at, updated_at";

/// Provides read and back-office write operations for coverage types.
pub struct CoverageTypeRepo;

impl CoverageTypeRepo {
    /// Insert a new coverage type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCoverageType,
    ) -> Result<CoverageType, sqlx::Error> {
        let query = format!(
            "INSERT INTO coverage_types (product_line, name, description, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CoverageType>(&query)
            .bind(&input.product_line)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a coverage type by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<CoverageType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM coverage_types WHERE id = $1");
        sqlx::query_as::<_, CoverageType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List coverage types for a product line, ordered by name.
    pub async fn list_by_line(
        pool: &PgPool,
        product_line: &str,
    ) -> Result<Vec<CoverageType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM coverage_types
             WHERE product_line = $1
             ORDER BY name"
        );
        sqlx::query_as::<_, CoverageType>(&query)
            .bind(product_line)
            .fetch_all(pool)
            .await
    }

    /// Record that a coverage type is compatible with a structure type.
    pub async fn link_structure_type(
        pool: &PgPool,
        coverage_type_id: EntityId,
        structure_type_id: EntityId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO coverage_type_structure_types (coverage_type_id, structure_type_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(coverage_type_id)
        .bind(structure_type_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List all coverage ↔ structure compatibility links.
    pub async fn list_links(pool: &PgPool) -> Result<Vec<CoverageStructureLink>, sqlx::Error> {
        sqlx::query_as::<_, CoverageStructureLink>(
            "SELECT coverage_type_id, structure_type_id
             FROM coverage_type_structure_types",
        )
        .fetch_all(pool)
        .await
    }
}
