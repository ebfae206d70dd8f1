//! Route definitions for board members.

use axum::routing::get;
use axum::Router;

use crate::handlers::board;
use crate::state::AppState;

/// Routes mounted at `/board`.
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
        .route("/", get(board::list).post(board::create))
        .route(
            "/{id}",
            get(board::get_by_id)
                .put(board::update)
                .delete(board::delete),
        )
}
