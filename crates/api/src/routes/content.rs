//! Route definitions for page content.
//!
//! `/structure/all` is registered before the `/{page_id}` capture so the
//! static schema stays reachable.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
///
/// ```text
/// GET    /                                      -> list_all
/// POST   /                                      -> upsert_entry (admin)
/// GET    /structure/all                         -> structure
/// GET    /{page_id}                             -> get_page
/// PUT    /{page_id}                             -> update_page (admin, bulk)
/// DELETE /{page_id}/{section_id}/{content_key}  -> delete_entry (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list_all).post(content::upsert_entry))
        .route("/structure/all", get(content::structure))
        .route(
            "/{page_id}",
            get(content::get_page).put(content::update_page),
        )
        .route(
            "/{page_id}/{section_id}/{content_key}",
            delete(content::delete_entry),
        )
}
