//! Handlers for the `/gallery` resource.
//!
//! The create endpoint is bulk-friendly: a multipart request may carry
//! any number of image files and every file becomes its own gallery row,
//! sharing the form's `title` and `category` fields. The response is
//! always an array so the admin frontend handles single and bulk uploads
//! with one code path.

use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::types::DbId;
use beacon_db::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use beacon_db::repositories::GalleryItemRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads;

/// Upload subdirectory for gallery images.
const SUBDIR: &str = "gallery";

#[derive(Debug, Deserialize)]
pub struct ListGalleryQuery {
    pub category: Option<String>,
}

/// GET /api/gallery?category=...
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListGalleryQuery>,
) -> AppResult<Json<Vec<GalleryItem>>> {
    let items = GalleryItemRepo::list(&state.pool, query.category.as_deref()).await?;
    Ok(Json(items))
}

/// GET /api/gallery/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GalleryItem>> {
    let item = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(item))
}

/// POST /api/gallery
///
/// JSON creates a single item from an already-known `image_path`.
/// Multipart creates one item per uploaded file.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    request: Request,
) -> AppResult<(StatusCode, Json<Vec<GalleryItem>>)> {
    let inputs = decode_create(&state, request).await?;
    let items = GalleryItemRepo::create_many(&state.pool, &inputs, Some(&admin.username)).await?;
    Ok((StatusCode::CREATED, Json(items)))
}

/// PUT /api/gallery/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    request: Request,
) -> AppResult<Json<GalleryItem>> {
    let existing = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;

    let input = decode_update(&state, request).await?;
    let item = GalleryItemRepo::update(&state.pool, id, &input, Some(&admin.username))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;

    uploads::remove_replaced(
        &state.uploads,
        Some(&existing.image_path),
        input.image_path.as_deref(),
    )
    .await;

    Ok(Json(item))
}

/// DELETE /api/gallery/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existing = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;

    let deleted = GalleryItemRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }));
    }

    state.uploads.remove(&existing.image_path).await;

    Ok(Json(MessageResponse::new("Gallery item deleted")))
}

async fn decode_create(state: &AppState, request: Request) -> AppResult<Vec<CreateGalleryItem>> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<CreateGalleryItem>::from_request(request, state).await?;
        if input.image_path.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "image_path is required".into(),
            )));
        }
        return Ok(vec![input]);
    }

    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    if form.images.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "at least one image file is required".into(),
        )));
    }

    let title = uploads::optional_text(&form.fields, "title");
    let category = uploads::optional_text(&form.fields, "category");
    Ok(form
        .images
        .iter()
        .map(|stored| CreateGalleryItem {
            title: title.clone(),
            category: category.clone(),
            image_path: stored.public_path.clone(),
        })
        .collect())
}

async fn decode_update(state: &AppState, request: Request) -> AppResult<UpdateGalleryItem> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<UpdateGalleryItem>::from_request(request, state).await?;
        return Ok(input);
    }
    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;
    Ok(UpdateGalleryItem {
        title: uploads::optional_text(&form.fields, "title"),
        category: uploads::optional_text(&form.fields, "category"),
        image_path: form.first_image_path(),
    })
}
