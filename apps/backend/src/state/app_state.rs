use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::server::StatsRefresh;
use crate::domain::words::WordSource;
use crate::infra::scratch_cache::ScratchCache;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Vocabulary for new games
    pub words: Arc<WordSource>,
    /// Cached derived statistics
    pub cache: Arc<ScratchCache>,
    pub stats_refresh: StatsRefresh,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        words: Arc<WordSource>,
        stats_refresh: StatsRefresh,
    ) -> Self {
        Self {
            db,
            words,
            cache: Arc::new(ScratchCache::new()),
            stats_refresh,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
