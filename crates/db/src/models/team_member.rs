//! Team member entity model and DTOs.

use beacon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: i32,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a team member.
#[derive(Debug, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a team member. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: Option<i32>,
}
