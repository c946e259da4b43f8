// Application state handed to every request handler

use sqlx::SqlitePool;
use std::sync::Arc;

use super::config::AppConfig;
use crate::services::ResumeStorage;

/// Database pool, resume storage and configuration
///
/// Nothing in here is mutated after startup, so handlers share it through
/// an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub storage: Arc<ResumeStorage>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, storage: ResumeStorage, config: AppConfig) -> Self {
        Self {
            db,
            storage: Arc::new(storage),
            config: Arc::new(config),
        }
    }
}
