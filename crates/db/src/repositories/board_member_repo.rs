//! Repository for the `board_members` table.

use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::board_member::{BoardMember, CreateBoardMember, UpdateBoardMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, role, organization, image_path, sort_order, updated_by, created_at, updated_at";

/// Provides CRUD operations for board members.
pub struct BoardMemberRepo;

impl BoardMemberRepo {
    /// Insert a new board member, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to 0.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBoardMember,
        updated_by: Option<&str>,
    ) -> Result<BoardMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO board_members (name, role, organization, image_path, sort_order, updated_by)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.organization)
            .bind(&input.image_path)
            .bind(input.sort_order)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// List all board members in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<BoardMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM board_members ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, BoardMember>(&query).fetch_all(pool).await
    }

    /// Find a board member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BoardMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM board_members WHERE id = $1");
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a board member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBoardMember,
        updated_by: Option<&str>,
    ) -> Result<Option<BoardMember>, sqlx::Error> {
        let query = format!(
            "UPDATE board_members SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                organization = COALESCE($4, organization),
                image_path = COALESCE($5, image_path),
                sort_order = COALESCE($6, sort_order),
                updated_by = COALESCE($7, updated_by)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.organization)
            .bind(&input.image_path)
            .bind(input.sort_order)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a board member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM board_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
