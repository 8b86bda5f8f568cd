//! Repository for the `product_models` table.

use altana_core::types::EntityId;
use sqlx::PgPool;

use crate::models::product_model::{CreateProductModel, ProductModel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_line, structure_type_id, name, description, image_url, \
    created_at, updated_at";

/// Provides read and back-office write operations for product models.
pub struct ProductModelRepo;

impl ProductModelRepo {
    /// Insert a new product model, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductModel,
    ) -> Result<ProductModel, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_models (product_line, structure_type_id, name, description, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductModel>(&query)
            .bind(&input.product_line)
            .bind(input.structure_type_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a product model by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<ProductModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_models WHERE id = $1");
        sqlx::query_as::<_, ProductModel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List product models for a product line, ordered by name.
    pub async fn list_by_line(
        pool: &PgPool,
        product_line: &str,
    ) -> Result<Vec<ProductModel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_models
             WHERE product_line = $1
             ORDER BY name"
        );
        sqlx::query_as::<_, ProductModel>(&query)
            .bind(product_line)
            .fetch_all(pool)
            .await
    }

    /// List the model IDs compatible with a structure type.
    ///
    /// Used when a structure-type change must narrow the model candidate
    /// set before clearing a dangling selection.
    pub async fn list_ids_by_structure_type(
        pool: &PgPool,
        structure_type_id: EntityId,
    ) -> Result<Vec<EntityId>, sqlx::Error> {
        let rows: Vec<(EntityId,)> =
            sqlx::query_as("SELECT id FROM product_models WHERE structure_type_id = $1")
                .bind(structure_type_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}
