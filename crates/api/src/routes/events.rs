//! Route definitions for events and news posts.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /          -> list (?type=event|news)
/// POST   /          -> create (admin, JSON or multipart)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (admin, JSON or multipart)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list).post(events::create))
        .route(
            "/{id}",
            get(events::get_by_id)
                .put(events::update)
                .delete(events::delete),
        )
}
