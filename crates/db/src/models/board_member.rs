//! Board member entity model and DTOs.

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `board_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoardMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub organization: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: i32,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a board member.
#[derive(Debug, Deserialize)]
pub struct CreateBoardMember {
    pub name: String,
    pub role: String,
    pub organization: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a board member. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBoardMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub organization: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: Option<i32>,
}
