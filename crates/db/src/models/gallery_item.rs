//! Gallery item entity model and DTOs.

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `gallery_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_path: String,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery item. The image path is mandatory; a
/// gallery row without a picture is meaningless.
#[derive(Debug, Deserialize)]
pub struct CreateGalleryItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_path: String,
}

/// DTO for updating a gallery item. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateGalleryItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_path: Option<String>,
}
