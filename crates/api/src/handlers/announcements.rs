//! Handlers for the `/announcements` resource. JSON only; announcements
//! carry no image.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::types::DbId;
use beacon_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use beacon_db::repositories::AnnouncementRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/announcements
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = AnnouncementRepo::list(&state.pool).await?;
    Ok(Json(announcements))
}

/// GET /api/announcements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// POST /api/announcements
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    if input.body.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("body is required".into())));
    }
    let announcement =
        AnnouncementRepo::create(&state.pool, &input, Some(&admin.username)).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /api/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::update(&state.pool, id, &input, Some(&admin.username))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// DELETE /api/announcements/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = AnnouncementRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }));
    }
    Ok(Json(MessageResponse::new("Announcement deleted")))
}
