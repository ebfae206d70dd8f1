//! Route definitions for named site images.

use axum::routing::get;
use axum::Router;

use crate::handlers::site_images;
use crate::state::AppState;

/// Routes mounted at `/site-images`.
///
/// ```text
/// GET    /          -> list (?page_id=...&category=...)
/// POST   /          -> create (admin, multipart only)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (admin, JSON metadata or multipart replace)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site_images::list).post(site_images::create))
        .route(
            "/{id}",
            get(site_images::get_by_id)
                .put(site_images::update)
                .delete(site_images::delete),
        )
}
