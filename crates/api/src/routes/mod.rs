//! HTTP route definitions.
//!
//! Everything except `/health` and the static `/uploads` tree lives under
//! `/api`:
//!
//! ```text
//! /api
//! ├── /admin
//! │   └── POST   /login
//! ├── /team
//! │   ├── GET    /               POST   /
//! │   └── GET    /{id}           PUT    /{id}        DELETE /{id}
//! ├── /board
//! │   ├── GET    /               POST   /
//! │   └── GET    /{id}           PUT    /{id}        DELETE /{id}
//! ├── /events
//! │   ├── GET    /?type=         POST   /
//! │   └── GET    /{id}           PUT    /{id}        DELETE /{id}
//! ├── /gallery
//! │   ├── GET    /?category=     POST   /  (bulk multipart)
//! │   └── GET    /{id}           PUT    /{id}        DELETE /{id}
//! ├── /announcements
//! │   ├── GET    /               POST   /
//! │   └── GET    /{id}           PUT    /{id}        DELETE /{id}
//! ├── /content
//! │   ├── GET    /               POST   /
//! │   ├── GET    /structure/all
//! │   ├── GET    /{page_id}      PUT    /{page_id}  (bulk)
//! │   └── DELETE /{page_id}/{section_id}/{content_key}
//! ├── /settings
//! │   ├── GET    /?category=     POST   /            PUT    /  (bulk)
//! │   ├── POST   /initialize
//! │   └── DELETE /{id}
//! └── /site-images
//!     ├── GET    /?page_id=&category=                POST   /  (multipart)
//!     └── GET    /{id}           PUT    /{id}        DELETE /{id}
//! ```
//!
//! Reads are public; writes require an admin bearer token.

use axum::Router;

use crate::state::AppState;

pub mod announcements;
pub mod auth;
pub mod board;
pub mod content;
pub mod events;
pub mod gallery;
pub mod health;
pub mod settings;
pub mod site_images;
pub mod team;

/// Assemble the `/api` router. Health stays at the root; see `main.rs`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", auth::router())
        .nest("/team", team::router())
        .nest("/board", board::router())
        .nest("/events", events::router())
        .nest("/gallery", gallery::router())
        .nest("/announcements", announcements::router())
        .nest("/content", content::router())
        .nest("/settings", settings::router())
        .nest("/site-images", site_images::router())
}
