//! Handlers for the `/settings` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::settings::DEFAULT_SETTINGS;
use beacon_core::types::DbId;
use beacon_db::models::site_setting::{BulkSettingsUpdate, SiteSetting, UpsertSiteSetting};
use beacon_db::repositories::SiteSettingRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListSettingsQuery {
    pub category: Option<String>,
}

/// GET /api/settings?category=...
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListSettingsQuery>,
) -> AppResult<Json<Vec<SiteSetting>>> {
    let settings = SiteSettingRepo::list(&state.pool, query.category.as_deref()).await?;
    Ok(Json(settings))
}

/// POST /api/settings
///
/// Upsert one setting by key. New keys get their metadata from the body;
/// existing keys keep stored metadata unless the body overrides it.
pub async fn upsert(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<UpsertSiteSetting>,
) -> AppResult<Json<SiteSetting>> {
    if input.key.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation("key is required".into())));
    }
    let setting = SiteSettingRepo::upsert(&state.pool, &input, Some(&admin.username)).await?;
    Ok(Json(setting))
}

/// PUT /api/settings
///
/// Bulk value save: `{ "settings": { key -> value } }`. Returns the rows
/// that were written. Unknown keys are created with plain-text metadata.
pub async fn bulk_update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<BulkSettingsUpdate>,
) -> AppResult<Json<Vec<SiteSetting>>> {
    if input.settings.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "no settings provided".into(),
        )));
    }
    let settings =
        SiteSettingRepo::bulk_update_values(&state.pool, &input.settings, Some(&admin.username))
            .await?;
    Ok(Json(settings))
}

/// POST /api/settings/initialize
///
/// Seed the default settings. Existing keys are never overwritten, so
/// this is safe to call on every deploy.
pub async fn initialize(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<MessageResponse>> {
    let created = SiteSettingRepo::seed_defaults(&state.pool, DEFAULT_SETTINGS).await?;
    Ok(Json(MessageResponse::new(format!(
        "Initialized {created} default settings"
    ))))
}

/// DELETE /api/settings/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = SiteSettingRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SiteSetting",
            id,
        }));
    }
    Ok(Json(MessageResponse::new("Setting deleted")))
}
