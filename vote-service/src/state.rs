//! Shared application state

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;

use crate::directory::ElectorDirectory;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub directory: Arc<dyn ElectorDirectory>,
}
