//! Repository for the `colors` table.

use altana_core::types::EntityId;
use sqlx::PgPool;

use crate::models::color::{Color, CreateColor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, product_line, name, macro_category, hex_code, image_url, created_at, updated_at";

/// Provides read and back-office write operations for colors.
pub struct ColorRepo;

impl ColorRepo {
    /// Insert a new color, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateColor) -> Result<Color, sqlx::Error> {
        let query = format!(
            "INSERT INTO colors (product_line, name, macro_category, hex_code, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Color>(&query)
            .bind(&input.product_line)
            .bind(&input.name)
            .bind(&input.macro_category)
            .bind(&input.hex_code)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a color by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors WHERE id = $1");
        sqlx::query_as::<_, Color>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List colors for a product line, optionally scoped to one macro
    /// category, ordered by name.
    pub async fn list_by_line(
        pool: &PgPool,
        product_line: &str,
        macro_category: Option<&str>,
    ) -> Result<Vec<Color>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM colors
             WHERE product_line = $1
               AND ($2::text IS NULL OR macro_category = $2)
             ORDER BY name"
        );
        sqlx::query_as::<_, Color>(&query)
            .bind(product_line)
            .bind(macro_category)
            .fetch_all(pool)
            .await
    }
}
