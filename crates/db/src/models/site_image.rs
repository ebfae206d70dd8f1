//! Site image entity model and DTOs.
//!
//! Named placement images (logo, banners, section backgrounds). The
//! unique `name` is how the frontend asks for them, so replacing a file
//! keeps the name and swaps the path underneath.

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteImage {
    pub id: DbId,
    pub name: String,
    pub page_id: Option<String>,
    pub section_id: Option<String>,
    pub category: Option<String>,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a site image record. Built by the upload handler,
/// never deserialized straight from a client body.
#[derive(Debug)]
pub struct CreateSiteImage {
    pub name: String,
    pub page_id: Option<String>,
    pub section_id: Option<String>,
    pub category: Option<String>,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// DTO for updating site image metadata. All fields are optional; file
/// replacement goes through the upload handler, which fills the file
/// columns here after storing the new file.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSiteImage {
    pub name: Option<String>,
    pub page_id: Option<String>,
    pub section_id: Option<String>,
    pub category: Option<String>,
    #[serde(skip)]
    pub file_path: Option<String>,
    #[serde(skip)]
    pub file_size: Option<i64>,
    #[serde(skip)]
    pub mime_type: Option<String>,
    #[serde(skip)]
    pub width: Option<i32>,
    #[serde(skip)]
    pub height: Option<i32>,
}
