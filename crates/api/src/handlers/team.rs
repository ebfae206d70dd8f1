//! Handlers for the `/team` resource.

use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::types::DbId;
use beacon_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use beacon_db::repositories::TeamMemberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads;

/// Upload subdirectory for team member photos.
const SUBDIR: &str = "team";

/// GET /api/team
///
/// All team members, sorted by display order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/team/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeamMember>> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;
    Ok(Json(member))
}

/// POST /api/team
///
/// Accepts plain JSON or multipart form data; a file part becomes the
/// member's photo.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    request: Request,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let input = decode_create(&state, request).await?;
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("name is required".into())));
    }
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("title is required".into())));
    }

    let member = TeamMemberRepo::create(&state.pool, &input, Some(&admin.username)).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/team/{id}
///
/// Partial update; absent fields keep their stored values. A new photo
/// replaces the old file on disk.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    request: Request,
) -> AppResult<Json<TeamMember>> {
    let existing = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;

    let input = decode_update(&state, request).await?;
    let member = TeamMemberRepo::update(&state.pool, id, &input, Some(&admin.username))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;

    uploads::remove_replaced(
        &state.uploads,
        existing.image_path.as_deref(),
        input.image_path.as_deref(),
    )
    .await;

    Ok(Json(member))
}

/// DELETE /api/team/{id}
///
/// Removes the row, then the stored photo (best-effort).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existing = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;

    let deleted = TeamMemberRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }));
    }

    if let Some(path) = &existing.image_path {
        state.uploads.remove(path).await;
    }

    Ok(Json(MessageResponse::new("Team member deleted")))
}

async fn decode_create(state: &AppState, request: Request) -> AppResult<CreateTeamMember> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<CreateTeamMember>::from_request(request, state).await?;
        return Ok(input);
    }
    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    Ok(CreateTeamMember {
        name: uploads::require_text(&form.fields, "name")?,
        title: uploads::require_text(&form.fields, "title")?,
        bio: uploads::optional_text(&form.fields, "bio"),
        image_path: form.first_image_path(),
        sort_order: uploads::parse_i32_field(&form.fields, "sort_order")?,
    })
}

async fn decode_update(state: &AppState, request: Request) -> AppResult<UpdateTeamMember> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<UpdateTeamMember>::from_request(request, state).await?;
        return Ok(input);
    }
    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    Ok(UpdateTeamMember {
        name: uploads::optional_text(&form.fields, "name"),
        title: uploads::optional_text(&form.fields, "title"),
        bio: uploads::optional_text(&form.fields, "bio"),
        image_path: form.first_image_path(),
        sort_order: uploads::parse_i32_field(&form.fields, "sort_order")?,
    })
}
