//! Page content entity model and DTOs.
//!
//! Each row is one editable value keyed by `(page_id, section_id,
//! content_key)`; the valid keys are defined by the static schema in
//! `beacon_core::content`.

use std::collections::BTreeMap;

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `page_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageContentEntry {
    pub id: DbId,
    pub page_id: String,
    pub section_id: String,
    pub content_key: String,
    pub content: String,
    pub content_type: String,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting one entry directly.
#[derive(Debug, Deserialize)]
pub struct UpsertPageContent {
    pub page_id: String,
    pub section_id: String,
    pub content_key: String,
    pub content: String,
}

/// One validated row ready for upsert. Assembled by the API layer after
/// schema validation has resolved the content type.
#[derive(Debug)]
pub struct PageContentRow {
    pub section_id: String,
    pub content_key: String,
    pub content: String,
    pub content_type: String,
}

/// Body of a bulk page save: section id -> content key -> value.
/// BTreeMap, so entries apply in a stable order.
#[derive(Debug, Deserialize)]
pub struct BulkPageUpdate {
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
}
