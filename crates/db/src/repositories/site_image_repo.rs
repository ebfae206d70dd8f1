//! Repository for the `site_images` table.

use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_image::{CreateSiteImage, SiteImage, UpdateSiteImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, page_id, section_id, category, file_path, file_size, \
                       mime_type, width, height, updated_by, created_at, updated_at";

/// Provides CRUD operations for named site images.
pub struct SiteImageRepo;

impl SiteImageRepo {
    /// Insert a new site image record, returning the created row.
    ///
    /// A duplicate `name` violates `uq_site_images_name`; the API layer
    /// maps that to a conflict response.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSiteImage,
        updated_by: Option<&str>,
    ) -> Result<SiteImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_images (name, page_id, section_id, category, file_path,
                                      file_size, mime_type, width, height, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteImage>(&query)
            .bind(&input.name)
            .bind(&input.page_id)
            .bind(&input.section_id)
            .bind(&input.category)
            .bind(&input.file_path)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(input.width)
            .bind(input.height)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// List site images by name, optionally filtered by page or category.
    pub async fn list(
        pool: &PgPool,
        page_id: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<SiteImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM site_images
             WHERE ($1::text IS NULL OR page_id = $1)
               AND ($2::text IS NULL OR category = $2)
             ORDER BY name"
        );
        sqlx::query_as::<_, SiteImage>(&query)
            .bind(page_id)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find a site image by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SiteImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_images WHERE id = $1");
        sqlx::query_as::<_, SiteImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a site image by its unique placement name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<SiteImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_images WHERE name = $1");
        sqlx::query_as::<_, SiteImage>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Update a site image. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSiteImage,
        updated_by: Option<&str>,
    ) -> Result<Option<SiteImage>, sqlx::Error> {
        let query = format!(
            "UPDATE site_images SET
                name = COALESCE($2, name),
                page_id = COALESCE($3, page_id),
                section_id = COALESCE($4, section_id),
                category = COALESCE($5, category),
                file_path = COALESCE($6, file_path),
                file_size = COALESCE($7, file_size),
                mime_type = COALESCE($8, mime_type),
                width = COALESCE($9, width),
                height = COALESCE($10, height),
                updated_by = COALESCE($11, updated_by)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteImage>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.page_id)
            .bind(&input.section_id)
            .bind(&input.category)
            .bind(&input.file_path)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(input.width)
            .bind(input.height)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a site image by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
