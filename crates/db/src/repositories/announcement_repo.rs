//! Repository for the `announcements` table.

use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, body, link, updated_by, created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert a new announcement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
        updated_by: Option<&str>,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (body, link, updated_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.body)
            .bind(&input.link)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// List all announcements, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Announcement>(&query).fetch_all(pool).await
    }

    /// Find an announcement by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an announcement. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
        updated_by: Option<&str>,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                body = COALESCE($2, body),
                link = COALESCE($3, link),
                updated_by = COALESCE($4, updated_by)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.body)
            .bind(&input.link)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete an announcement by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
