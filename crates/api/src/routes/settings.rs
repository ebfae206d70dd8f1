//! Route definitions for site settings.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /             -> list (?category=...)
/// POST   /             -> upsert (admin)
/// PUT    /             -> bulk_update (admin)
/// POST   /initialize   -> initialize (admin, seed defaults)
/// DELETE /{id}         -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(settings::list)
                .post(settings::upsert)
                .put(settings::bulk_update),
        )
        .route("/initialize", post(settings::initialize))
        .route("/{id}", delete(settings::delete))
}
