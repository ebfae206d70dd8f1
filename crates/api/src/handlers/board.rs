//! Handlers for the `/board` resource.

use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::types::DbId;
use beacon_db::models::board_member::{BoardMember, CreateBoardMember, UpdateBoardMember};
use beacon_db::repositories::BoardMemberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads;

/// Upload subdirectory for board member photos.
const SUBDIR: &str = "board";

/// GET /api/board
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BoardMember>>> {
    let members = BoardMemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/board/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BoardMember>> {
    let member = BoardMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BoardMember",
            id,
        }))?;
    Ok(Json(member))
}

/// POST /api/board
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    request: Request,
) -> AppResult<(StatusCode, Json<BoardMember>)> {
    let input = decode_create(&state, request).await?;
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("name is required".into())));
    }
    if input.role.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("role is required".into())));
    }

    let member = BoardMemberRepo::create(&state.pool, &input, Some(&admin.username)).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/board/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    request: Request,
) -> AppResult<Json<BoardMember>> {
    let existing = BoardMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BoardMember",
            id,
        }))?;

    let input = decode_update(&state, request).await?;
    let member = BoardMemberRepo::update(&state.pool, id, &input, Some(&admin.username))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BoardMember",
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

/// DELETE /api/board/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existing = BoardMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BoardMember",
            id,
        }))?;

    let deleted = BoardMemberRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BoardMember",
            id,
        }));
    }

    if let Some(path) = &existing.image_path {
        state.uploads.remove(path).await;
    }

    Ok(Json(MessageResponse::new("Board member deleted")))
}

async fn decode_create(state: &AppState, request: Request) -> AppResult<CreateBoardMember> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<CreateBoardMember>::from_request(request, state).await?;
        return Ok(input);
    }
    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    Ok(CreateBoardMember {
        name: uploads::require_text(&form.fields, "name")?,
        role: uploads::require_text(&form.fields, "role")?,
        organization: uploads::optional_text(&form.fields, "organization"),
        image_path: form.first_image_path(),
        sort_order: uploads::parse_i32_field(&form.fields, "sort_order")?,
    })
}

async fn decode_update(state: &AppState, request: Request) -> AppResult<UpdateBoardMember> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<UpdateBoardMember>::from_request(request, state).await?;
        return Ok(input);
    }
    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    Ok(UpdateBoardMember {
        name: uploads::optional_text(&form.fields, "name"),
        role: uploads::optional_text(&form.fields, "role"),
        organization: uploads::optional_text(&form.fields, "organization"),
        image_path: form.first_image_path(),
        sort_order: uploads::parse_i32_field(&form.fields, "sort_order")?,
    })
}
