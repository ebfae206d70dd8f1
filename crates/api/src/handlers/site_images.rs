//! Handlers for the `/site-images` resource.
//!
//! Site images are named placements (logo, hero background) rather than
//! gallery content. Creation always carries a file, so the endpoint is
//! multipart-only; metadata-only edits go through the JSON update path,
//! which cannot touch the file columns.

use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::StatusCode;
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::types::DbId;
use beacon_db::models::site_image::{CreateSiteImage, SiteImage, UpdateSiteImage};
use beacon_db::repositories::SiteImageRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads;

/// Upload subdirectory for named site images.
const SUBDIR: &str = "site";

#[derive(Debug, Deserialize)]
pub struct ListSiteImagesQuery {
    pub page_id: Option<String>,
    pub category: Option<String>,
}

/// GET /api/site-images?page_id=...&category=...
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListSiteImagesQuery>,
) -> AppResult<Json<Vec<SiteImage>>> {
    let images =
        SiteImageRepo::list(&state.pool, query.page_id.as_deref(), query.category.as_deref())
            .await?;
    Ok(Json(images))
}

/// GET /api/site-images/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SiteImage>> {
    let image = SiteImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteImage",
            id,
        }))?;
    Ok(Json(image))
}

/// POST /api/site-images
///
/// Multipart only: a `name` field plus the image file. A stored file is
/// cleaned up again if the insert does not go through.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    request: Request,
) -> AppResult<(StatusCode, Json<SiteImage>)> {
    if !uploads::is_multipart(request.headers()) {
        return Err(AppError::BadRequest(
            "multipart/form-data with an image file is required".into(),
        ));
    }
    let multipart = Multipart::from_request(request, &state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;

    let mut images = form.images.into_iter();
    let Some(stored) = images.next() else {
        return Err(AppError::Core(CoreError::Validation(
            "an image file is required".into(),
        )));
    };
    // One placement, one file. Extra file parts are discarded.
    for extra in images {
        state.uploads.remove(&extra.public_path).await;
    }

    let name = match uploads::require_text(&form.fields, "name") {
        Ok(name) => name,
        Err(e) => {
            state.uploads.remove(&stored.public_path).await;
            return Err(e);
        }
    };

    if let Some(existing) = SiteImageRepo::find_by_name(&state.pool, &name).await? {
        state.uploads.remove(&stored.public_path).await;
        return Err(AppError::Core(CoreError::Conflict(format!(
            "site image '{}' already exists (id {})",
            existing.name, existing.id
        ))));
    }

    let input = CreateSiteImage {
        name,
        page_id: uploads::optional_text(&form.fields, "page_id"),
        section_id: uploads::optional_text(&form.fields, "section_id"),
        category: uploads::optional_text(&form.fields, "category"),
        file_path: stored.public_path.clone(),
        file_size: stored.file_size,
        mime_type: stored.mime_type.clone(),
        width: stored.width,
        height: stored.height,
    };

    // The name pre-check races with concurrent creates; the unique index
    // is the backstop and classifies as a conflict.
    let image = match SiteImageRepo::create(&state.pool, &input, Some(&admin.username)).await {
        Ok(image) => image,
        Err(e) => {
            state.uploads.remove(&stored.public_path).await;
            return Err(e.into());
        }
    };

    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/site-images/{id}
///
/// JSON edits metadata only. Multipart may also replace the file, in
/// which case the previous file is removed after the row is updated.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    request: Request,
) -> AppResult<Json<SiteImage>> {
    let existing = SiteImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteImage",
            id,
        }))?;

    let input = decode_update(&state, request).await?;
    let image = match SiteImageRepo::update(&state.pool, id, &input, Some(&admin.username)).await {
        Ok(Some(image)) => image,
        Ok(None) => {
            if let Some(path) = &input.file_path {
                state.uploads.remove(path).await;
            }
            return Err(AppError::Core(CoreError::NotFound {
                entity: "SiteImage",
                id,
            }));
        }
        Err(e) => {
            if let Some(path) = &input.file_path {
                state.uploads.remove(path).await;
            }
            return Err(e.into());
        }
    };

    uploads::remove_replaced(
        &state.uploads,
        Some(&existing.file_path),
        input.file_path.as_deref(),
    )
    .await;

    Ok(Json(image))
}

/// DELETE /api/site-images/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let existing = SiteImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteImage",
            id,
        }))?;

    let deleted = SiteImageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SiteImage",
            id,
        }));
    }

    state.uploads.remove(&existing.file_path).await;

    Ok(Json(MessageResponse::new("Site image deleted")))
}

async fn decode_update(state: &AppState, request: Request) -> AppResult<UpdateSiteImage> {
    if !uploads::is_multipart(request.headers()) {
        let AppJson(input) = AppJson::<UpdateSiteImage>::from_request(request, state).await?;
        return Ok(input);
    }

    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = uploads::collect_image_form(&state.uploads, SUBDIR, multipart).await?;

    let mut input = UpdateSiteImage {
        name: uploads::optional_text(&form.fields, "name"),
        page_id: uploads::optional_text(&form.fields, "page_id"),
        section_id: uploads::optional_text(&form.fields, "section_id"),
        category: uploads::optional_text(&form.fields, "category"),
        ..Default::default()
    };
    if let Some(stored) = form.images.into_iter().next() {
        input.file_path = Some(stored.public_path);
        input.file_size = Some(stored.file_size);
        input.mime_type = Some(stored.mime_type);
        input.width = stored.width;
        input.height = stored.height;
    }
    Ok(input)
}
