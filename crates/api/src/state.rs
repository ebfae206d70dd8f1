use std::sync::Arc;

use crate::config::ServerConfig;
use crate::content_cache::ContentCache;
use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: beacon_db::DbPool,
    /// Server configuration (JWT secret, upload limits, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Filesystem storage for uploaded images.
    pub uploads: Arc<UploadStore>,
    /// Cache of assembled page content maps, cleared on every content write.
    pub content_cache: Arc<ContentCache>,
}
