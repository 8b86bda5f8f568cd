//! Repository for the `wood_quotes` table.
//!
//! The configurator only ever calls `insert`; the remaining methods exist
//! for the back office (status changes, reference images, cleanup).

use altana_core::types::EntityId;
use sqlx::PgPool;

use crate::models::wood_quote::{CreateWoodQuote, WoodQuote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, structure_type_id, model_id, coverage_id, color_id, surface_id, \
    accessory_ids, width_cm, depth_cm, height_cm, package_type, name, email, phone, \
    address, city, postal_code, province, contact_preference, privacy_accepted, \
    total_price_cents, status, reference_image_url, created_at, updated_at";

/// Provides persistence operations for wood-line quotes.
pub struct WoodQuoteRepo;

impl WoodQuoteRepo {
    /// Insert a new quote, returning the created row.
    ///
    /// Status defaults to `new`. One unconditional insert per call; there
    /// is no idempotency key or deduplication.
    pub async fn insert(pool: &PgPool, input: &CreateWoodQuote) -> Result<WoodQuote, sqlx::Error> {
        let query = format!(
            "INSERT INTO wood_quotes
                (structure_type_id, model_id, coverage_id, color_id, surface_id,
                 accessory_ids, width_cm, depth_cm, height_cm, package_type,
                 name, email, phone, address, city, postal_code, province,
                 contact_preference, privacy_accepted, total_price_cents)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WoodQuote>(&query)
            .bind(input.structure_type_id)
            .bind(input.model_id)
            .bind(input.coverage_id)
            .bind(input.color_id)
            .bind(input.surface_id)
            .bind(&input.accessory_ids)
            .bind(input.width_cm)
            .bind(input.depth_cm)
            .bind(input.height_cm)
            .bind(&input.package_type)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.postal_code)
            .bind(&input.province)
            .bind(&input.contact_preference)
            .bind(input.privacy_accepted)
            .bind(input.total_price_cents)
            .fetch_one(pool)
            .await
    }

    /// Find a quote by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<WoodQuote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wood_quotes WHERE id = $1");
        sqlx::query_as::<_, WoodQuote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List quotes, most recent first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WoodQuote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wood_quotes
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, WoodQuote>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all quotes.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM wood_quotes")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Update the status of a quote. Returns `None` if no row matched.
    pub async fn update_status(
        pool: &PgPool,
        id: EntityId,
        status: &str,
    ) -> Result<Option<WoodQuote>, sqlx::Error> {
        let query = format!(
            "UPDATE wood_quotes SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WoodQuote>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Attach a reference image to a quote. Returns `None` if no row
    /// matched.
    pub async fn set_reference_image(
        pool: &PgPool,
        id: EntityId,
        url: &str,
    ) -> Result<Option<WoodQuote>, sqlx::Error> {
        let query = format!(
            "UPDATE wood_quotes SET reference_image_url = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WoodQuote>(&query)
            .bind(id)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a quote. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wood_quotes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
