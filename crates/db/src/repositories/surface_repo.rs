//! Repository for the `surfaces` table.

use altana_core::types::EntityId;
use sqlx::PgPool;

use crate::models::surface::{CreateSurface, Surface};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_line, name, description, price_per_sqm_cents, image_url, \
    created_at, updated_at";

/// Provides read and back-office write operations for surfaces.
pub struct SurfaceRepo;

impl SurfaceRepo {
    /// Insert a new surface, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSurface) -> Result<Surface, sqlx::Error> {
        let query = format!(
            "INSERT INTO surfaces (product_line, name, description, price_per_sqm_cents, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Surface>(&query)
            .bind(&input.product_line)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price_per_sqm_cents)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a surface by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Surface>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM surfaces WHERE id = $1");
        sqlx::query_as::<_, Surface>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List surfaces for a product line, ordered by name.
    pub async fn list_by_line(
        pool: &PgPool,
        product_line: &str,
    ) -> Result<Vec<Surface>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM surfaces
             WHERE product_line = $1
             ORDER BY name"
        );
        sqlx::query_as::<_, Surface>(&query)
            .bind(product_line)
            .fetch_all(pool)
            .await
    }
}
