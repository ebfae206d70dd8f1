//! Handlers for the `/events` resource.
//!
//! One table backs both dated events and undated news posts. The public
//! list endpoint takes an optional `?type=` filter so the frontend can
//! render the two feeds separately.

use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::events::validate_event_type;
use beacon_core::types::DbId;
use beacon_db::models::event::{CreateEvent, Event, UpdateEvent};
use beacon_db::repositories::EventRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads;

/// Upload subdirectory for event flyers.
const SUBDIR: &str = "events";

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// GET /api/events?type=event|news
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> AppResult<Json<Vec<Event>>> {
    if let Some(event_type) = &query.event_type {
        validate_event_type(event_type)?;
    }
    let events = EventRepo::list(&state.pool, query.event_type.as_deref()).await?;
    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    request: Request,
) -> AppResult<(StatusCode, Json<Event>)> {
    let input = decode_create(&state, request).await?;
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("title is required".into())));
    }
    validate_event_type(&input.event_type)?;

    let event = EventRepo::create(&state.pool, &input, Some(&admin.username)).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    request: Request,
) -> AppResult<Json<Event>> {
    let existing = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    let input = decode_update(&state, request).await?;
    if let Some(event_type) = &input.event_type {
        validate_event_type(event_type)?;
    }

    let event = EventRepo::update(&state.pool, id, &input, Some(&admin.username))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    uploads::remove_replaced(
        &state.uploads,
        existing.flyer_image_path.as_deref(),
        input.flyer_image_path.as_deref(),
    )
    .await;

    Ok(Json(event))
}

/// DELETE /api/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existing = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    let deleted = EventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Event", id }));
    }

    if let Some(path) = &existing.flyer_image_path {
        state.uploads.remove(path).await;
    }

    Ok(Json(MessageResponse::new("Event deleted")))
}

async fn decode_create(state: &AppState, request: Request) -> AppResult<CreateEvent> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<CreateEvent>::from_request(request, state).await?;
        return Ok(input);
    }
    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    Ok(CreateEvent {
        title: uploads::require_text(&form.fields, "title")?,
        description: uploads::optional_text(&form.fields, "description"),
        rich_content: uploads::optional_text(&form.fields, "rich_content"),
        event_date: uploads::parse_datetime_field(&form.fields, "event_date")?,
        event_type: uploads::require_text(&form.fields, "event_type")?,
        flyer_image_path: form.first_image_path(),
    })
}

async fn decode_update(state: &AppState, request: Request) -> AppResult<UpdateEvent> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<UpdateEvent>::from_request(request, state).await?;
        return Ok(input);
    }
    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    Ok(UpdateEvent {
        title: uploads::optional_text(&form.fields, "title"),
        description: uploads::optional_text(&form.fields, "description"),
        rich_content: uploads::optional_text(&form.fields, "rich_content"),
        event_date: uploads::parse_datetime_field(&form.fields, "event_date")?,
        event_type: uploads::optional_text(&form.fields, "event_type"),
        flyer_image_path: form.first_image_path(),
    })
}
