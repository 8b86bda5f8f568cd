//! Repository for the `accessories` table (wood line).

use altana_core::types::EntityId;
use sqlx::PgPool;

use crate::models::accessory::{Accessory, CreateAccessory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image_url, created_at, updated_at";

/// Provides read and back-office write operations for accessories.
pub struct AccessoryRepo;

impl AccessoryRepo {
    /// Insert a new accessory, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAccessory) -> Result<Accessory, sqlx::Error> {
        let query = format!(
            "INSERT INTO accessories (name, description, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Accessory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an accessory by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Accessory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accessories WHERE id = $1");
        sqlx::query_as::<_, Accessory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all accessories, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Accessory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accessories ORDER BY name");
        sqlx::query_as::<_, Accessory>(&query).fetch_all(pool).await
    }
}
