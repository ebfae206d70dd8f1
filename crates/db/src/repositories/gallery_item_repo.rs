//! Repository for the `gallery_items` table.

use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, image_path, updated_by, created_at, updated_at";

/// Provides CRUD operations for gallery items, including bulk creation
/// for multi-file uploads.
pub struct GalleryItemRepo;

impl GalleryItemRepo {
    /// Insert a new gallery item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
        updated_by: Option<&str>,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items (title, category, image_path, updated_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.image_path)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// Insert one row per item within a single transaction. A failure
    /// rolls back the whole batch.
    pub async fn create_many(
        pool: &PgPool,
        items: &[CreateGalleryItem],
        updated_by: Option<&str>,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(items.len());

        let query = format!(
            "INSERT INTO gallery_items (title, category, image_path, updated_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        for item in items {
            let row = sqlx::query_as::<_, GalleryItem>(&query)
                .bind(&item.title)
                .bind(&item.category)
                .bind(&item.image_path)
                .bind(updated_by)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// List gallery items, newest first, optionally filtered by category.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_items
             WHERE ($1::text IS NULL OR category = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find a gallery item by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a gallery item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
        updated_by: Option<&str>,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_items SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                image_path = COALESCE($4, image_path),
                updated_by = COALESCE($5, updated_by)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.image_path)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
