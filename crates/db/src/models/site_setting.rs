//! Site setting entity model and DTOs.

use std::collections::BTreeMap;

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub key: String,
    pub value: String,
    pub value_type: String,
    pub category: String,
    pub label: String,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting one setting by key.
#[derive(Debug, Deserialize)]
pub struct UpsertSiteSetting {
    pub key: String,
    pub value: String,
    pub value_type: Option<String>,
    pub category: Option<String>,
    pub label: Option<String>,
}

/// Body of a bulk settings save: key -> new value. Metadata columns
/// (type, category, label) are left as they are.
#[derive(Debug, Deserialize)]
pub struct BulkSettingsUpdate {
    pub settings: BTreeMap<String, String>,
}
