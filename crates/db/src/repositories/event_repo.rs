//! Repository for the `events` table.

use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, rich_content, event_date, event_type, \
                       flyer_image_path, updated_by, created_at, updated_at";

/// Provides CRUD operations for news posts and calendar events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    ///
    /// `event_type` must already be validated against the allow-list.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvent,
        updated_by: Option<&str>,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, description, rich_content, event_date, event_type,
                                 flyer_image_path, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.rich_content)
            .bind(input.event_date)
            .bind(&input.event_type)
            .bind(&input.flyer_image_path)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// List events, newest first, optionally filtered by type.
    ///
    /// Dated events sort by `event_date`; undated news posts fall back to
    /// creation time and sort after all dated rows.
    pub async fn list(pool: &PgPool, event_type: Option<&str>) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE ($1::text IS NULL OR event_type = $1)
             ORDER BY event_date DESC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_type)
            .fetch_all(pool)
            .await
    }

    /// Find an event by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
        updated_by: Option<&str>,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                rich_content = COALESCE($4, rich_content),
                event_date = COALESCE($5, event_date),
                event_type = COALESCE($6, event_type),
                flyer_image_path = COALESCE($7, flyer_image_path),
                updated_by = COALESCE($8, updated_by)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.rich_content)
            .bind(input.event_date)
            .bind(&input.event_type)
            .bind(&input.flyer_image_path)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
