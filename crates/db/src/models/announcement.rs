//! Announcement entity model and DTOs.

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `announcements` table. Shown in the site-wide banner.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub body: String,
    pub link: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an announcement.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncement {
    pub body: String,
    pub link: Option<String>,
}

/// DTO for updating an announcement. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAnnouncement {
    pub body: Option<String>,
    pub link: Option<String>,
}
