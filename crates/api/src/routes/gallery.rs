//! Route definitions for the photo gallery.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /          -> list (?category=...)
/// POST   /          -> create (admin, multipart bulk or JSON single; returns an array)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (admin, JSON or multipart)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route(
            "/{id}",
            get(gallery::get_by_id)
                .put(gallery::update)
                .delete(gallery::delete),
        )
}
