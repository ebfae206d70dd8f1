//! Handlers for the `/content` resource.
//!
//! Page content is a flat table of `(page_id, section_id, content_key)`
//! rows, but the wire shape is nested: the public read endpoint returns
//! `{ "page_id": ..., "sections": { section -> { key -> value } } }` and
//! the bulk save accepts the same nesting. Every incoming key is checked
//! against the static schema in `beacon_core::content` before it touches
//! the database.

use axum::extract::{Path, State};
use axum::Json;
use beacon_core::content::{require_field, require_page, PageDef, PAGES};
use beacon_core::error::CoreError;
use beacon_db::models::page_content::{
    BulkPageUpdate, PageContentEntry, PageContentRow, UpsertPageContent,
};
use beacon_db::repositories::PageContentRepo;
use serde_json::{json, Map, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::json::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/content
///
/// Every stored entry as flat rows, for the admin editor.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<PageContentEntry>>> {
    let entries = PageContentRepo::list_all(&state.pool).await?;
    Ok(Json(entries))
}

/// GET /api/content/structure/all
///
/// The static page/section/field schema the admin editor renders its
/// forms from.
pub async fn structure() -> Json<&'static [PageDef]> {
    Json(PAGES)
}

/// GET /api/content/{page_id}
///
/// Assembled `section -> key -> value` map for one page, served from the
/// in-process cache when warm.
pub async fn get_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> AppResult<Json<Value>> {
    require_page(&page_id)?;
    let map = load_page(&state, &page_id).await?;
    Ok(Json(map))
}

/// PUT /api/content/{page_id}
///
/// Bulk save. Upserts every `section.key` leaf in the body and returns
/// the page as it now reads; keys absent from the body are untouched.
pub async fn update_page(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(page_id): Path<String>,
    AppJson(input): AppJson<BulkPageUpdate>,
) -> AppResult<Json<Value>> {
    require_page(&page_id)?;
    if input.sections.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "no sections provided".into(),
        )));
    }

    let mut rows = Vec::new();
    for (section_id, fields) in &input.sections {
        for (key, value) in fields {
            let field = require_field(&page_id, section_id, key)?;
            rows.push(PageContentRow {
                section_id: section_id.clone(),
                content_key: key.clone(),
                content: value.clone(),
                content_type: field.kind.as_str().to_string(),
            });
        }
    }

    PageContentRepo::bulk_upsert(&state.pool, &page_id, &rows, Some(&admin.username)).await?;
    state.content_cache.clear().await;

    let map = load_page(&state, &page_id).await?;
    Ok(Json(map))
}

/// POST /api/content
///
/// Upsert a single entry addressed by its full composite key.
pub async fn upsert_entry(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<UpsertPageContent>,
) -> AppResult<Json<PageContentEntry>> {
    let field = require_field(&input.page_id, &input.section_id, &input.content_key)?;
    let row = PageContentRow {
        section_id: input.section_id.clone(),
        content_key: input.content_key.clone(),
        content: input.content.clone(),
        content_type: field.kind.as_str().to_string(),
    };

    let entry =
        PageContentRepo::upsert(&state.pool, &input.page_id, &row, Some(&admin.username)).await?;
    state.content_cache.clear().await;

    Ok(Json(entry))
}

/// DELETE /api/content/{page_id}/{section_id}/{content_key}
pub async fn delete_entry(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((page_id, section_id, content_key)): Path<(String, String, String)>,
) -> AppResult<Json<MessageResponse>> {
    let deleted =
        PageContentRepo::delete(&state.pool, &page_id, &section_id, &content_key).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFoundNamed {
            entity: "PageContentEntry",
            key: format!("{page_id}.{section_id}.{content_key}"),
        }));
    }
    state.content_cache.clear().await;

    Ok(Json(MessageResponse::new("Content entry deleted")))
}

/// Cached read of one page's assembled map.
async fn load_page(state: &AppState, page_id: &str) -> AppResult<Value> {
    if let Some(cached) = state.content_cache.get(page_id).await {
        return Ok(cached);
    }

    let entries = PageContentRepo::list_page(&state.pool, page_id).await?;
    let map = page_map(page_id, &entries);
    state.content_cache.insert(page_id, map.clone()).await;
    Ok(map)
}

/// Fold flat rows into `{ page_id, sections: { section -> { key -> value } } }`.
fn page_map(page_id: &str, entries: &[PageContentEntry]) -> Value {
    let mut sections = Map::new();
    for entry in entries {
        let section = sections
            .entry(entry.section_id.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(fields) = section {
            fields.insert(
                entry.content_key.clone(),
                Value::String(entry.content.clone()),
            );
        }
    }
    json!({ "page_id": page_id, "sections": sections })
}
