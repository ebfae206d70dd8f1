//! News/event entity model and DTOs.

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table. Covers both dated calendar events and
/// undated news posts, distinguished by `event_type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// HTML from the admin rich-text editor, stored verbatim. The public
    /// frontend sanitizes before rendering; see DESIGN.md.
    pub rich_content: Option<String>,
    pub event_date: Option<Timestamp>,
    pub event_type: String,
    pub flyer_image_path: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub rich_content: Option<String>,
    pub event_date: Option<Timestamp>,
    pub event_type: String,
    pub flyer_image_path: Option<String>,
}

/// DTO for updating an event. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rich_content: Option<String>,
    pub event_date: Option<Timestamp>,
    pub event_type: Option<String>,
    pub flyer_image_path: Option<String>,
}
