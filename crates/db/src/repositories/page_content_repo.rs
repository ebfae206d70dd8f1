//! Repository for the `page_content` table.
//!
//! Rows are keyed by `(page_id, section_id, content_key)` and always
//! written with upsert semantics; there is no plain insert.

use sqlx::PgPool;

use crate::models::page_content::{PageContentEntry, PageContentRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, page_id, section_id, content_key, content, content_type, \
                       updated_by, created_at, updated_at";

const UPSERT: &str = "INSERT INTO page_content \
                          (page_id, section_id, content_key, content, content_type, updated_by) \
                      VALUES ($1, $2, $3, $4, $5, $6) \
                      ON CONFLICT (page_id, section_id, content_key) DO UPDATE SET \
                          content = EXCLUDED.content, \
                          content_type = EXCLUDED.content_type, \
                          updated_by = EXCLUDED.updated_by";

/// Provides upsert-based access to page content entries.
pub struct PageContentRepo;

impl PageContentRepo {
    /// List every entry across all pages, in composite-key order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PageContentEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content ORDER BY page_id, section_id, content_key"
        );
        sqlx::query_as::<_, PageContentEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the entries for one page, in composite-key order.
    pub async fn list_page(
        pool: &PgPool,
        page_id: &str,
    ) -> Result<Vec<PageContentEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content
             WHERE page_id = $1
             ORDER BY section_id, content_key"
        );
        sqlx::query_as::<_, PageContentEntry>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    /// Upsert a single entry, returning the stored row.
    pub async fn upsert(
        pool: &PgPool,
        page_id: &str,
        row: &PageContentRow,
        updated_by: Option<&str>,
    ) -> Result<PageContentEntry, sqlx::Error> {
        let query = format!("{UPSERT} RETURNING {COLUMNS}");
        sqlx::query_as::<_, PageContentEntry>(&query)
            .bind(page_id)
            .bind(&row.section_id)
            .bind(&row.content_key)
            .bind(&row.content)
            .bind(&row.content_type)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// Upsert many entries for one page within a transaction. A failure
    /// rolls back the whole save.
    pub async fn bulk_upsert(
        pool: &PgPool,
        page_id: &str,
        rows: &[PageContentRow],
        updated_by: Option<&str>,
    ) -> Result<Vec<PageContentEntry>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(rows.len());

        let query = format!("{UPSERT} RETURNING {COLUMNS}");
        for row in rows {
            let stored = sqlx::query_as::<_, PageContentEntry>(&query)
                .bind(page_id)
                .bind(&row.section_id)
                .bind(&row.content_key)
                .bind(&row.content)
                .bind(&row.content_type)
                .bind(updated_by)
                .fetch_one(&mut *tx)
                .await?;
            results.push(stored);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// Delete one entry by composite key. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        page_id: &str,
        section_id: &str,
        content_key: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM page_content
             WHERE page_id = $1 AND section_id = $2 AND content_key = $3",
        )
        .bind(page_id)
        .bind(section_id)
        .bind(content_key)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
