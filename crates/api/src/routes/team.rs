//! Route definitions for team members.

use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/team`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create (admin, JSON or multipart)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (admin, JSON or multipart)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(team::list).post(team::create))
        .route(
            "/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
}
