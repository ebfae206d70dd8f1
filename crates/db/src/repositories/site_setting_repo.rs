//! Repository for the `site_settings` table.

use std::collections::BTreeMap;

use beacon_core::settings::SettingDef;
use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_setting::{SiteSetting, UpsertSiteSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, key, value, value_type, category, label, updated_by, created_at, updated_at";

/// Provides upsert-based access to site settings.
pub struct SiteSettingRepo;

impl SiteSettingRepo {
    /// List settings grouped for the admin editor, optionally filtered by
    /// category.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<SiteSetting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM site_settings
             WHERE ($1::text IS NULL OR category = $1)
             ORDER BY category, key"
        );
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find a setting by its unique key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE key = $1");
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Upsert one setting by key, returning the stored row.
    ///
    /// On insert, missing metadata falls back to defaults (`text`,
    /// `general`, label = key). On update, metadata changes only when the
    /// input provides it; the value is always replaced.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertSiteSetting,
        updated_by: Option<&str>,
    ) -> Result<SiteSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (key, value, value_type, category, label, updated_by)
             VALUES ($1, $2, COALESCE($3, 'text'), COALESCE($4, 'general'), COALESCE($5, $1), $6)
             ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                value_type = COALESCE($3, site_settings.value_type),
                category = COALESCE($4, site_settings.category),
                label = COALESCE($5, site_settings.label),
                updated_by = EXCLUDED.updated_by
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(&input.key)
            .bind(&input.value)
            .bind(&input.value_type)
            .bind(&input.category)
            .bind(&input.label)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }

    /// Upsert many `key -> value` pairs within a transaction. Unknown keys
    /// are created with default metadata; existing metadata is untouched.
    pub async fn bulk_update_values(
        pool: &PgPool,
        settings: &BTreeMap<String, String>,
        updated_by: Option<&str>,
    ) -> Result<Vec<SiteSetting>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(settings.len());

        let query = format!(
            "INSERT INTO site_settings (key, value, label, updated_by)
             VALUES ($1, $2, $1, $3)
             ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_by = EXCLUDED.updated_by
             RETURNING {COLUMNS}"
        );

        for (key, value) in settings {
            let row = sqlx::query_as::<_, SiteSetting>(&query)
                .bind(key)
                .bind(value)
                .bind(updated_by)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// Insert any missing default settings, leaving existing keys alone.
    /// Returns how many rows were created.
    pub async fn seed_defaults(pool: &PgPool, defs: &[SettingDef]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut created = 0;

        for def in defs {
            let result = sqlx::query(
                "INSERT INTO site_settings (key, value, value_type, category, label)
                 VALUES ($1, $2, $3, $4, $5)
                 ON CONFLICT (key) DO NOTHING",
            )
            .bind(def.key)
            .bind(def.value)
            .bind(def.value_type)
            .bind(def.category)
            .bind(def.label)
            .execute(&mut *tx)
            .await?;
            created += result.rows_affected();
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Delete a setting by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_settings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
