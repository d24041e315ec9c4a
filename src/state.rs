//! Shared application state.

use crate::db::DbPool;
use crate::models::dataset::Dataset;
use std::sync::Arc;

/// State handed to every handler through axum's `State` extractor.
///
/// The dataset is immutable after startup, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,

    /// Present only when the dataset is backed by PostgreSQL and the connection succeeded
    pub pool: Option<DbPool>,

    /// Whether PostgreSQL was configured as the dataset source
    pub database_configured: bool,
}

impl AppState {
    pub fn new(dataset: Dataset, pool: Option<DbPool>, database_configured: bool) -> Self {
        Self {
            dataset: Arc::new(dataset),
            pool,
            database_configured,
        }
    }
}
