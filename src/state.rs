//! Shared application state handed to every handler.

use crate::services::upload::UploadStore;
use sqlx::SqlitePool;
use std::sync::Arc;

/// The SQLite pool plus the on-disk upload store. Opened once at startup
/// and passed in; no module-level shared connection.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub uploads: UploadStore,
}
