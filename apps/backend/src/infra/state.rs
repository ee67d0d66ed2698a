use std::sync::Arc;

use crate::config::db::{DbKind, RuntimeEnv};
use crate::config::server::StatsRefresh;
use crate::domain::words::WordSource;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    runtime: RuntimeEnv,
    db_kind: Option<DbKind>,
    words: Option<WordSource>,
    stats_refresh: StatsRefresh,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            runtime: RuntimeEnv::Prod,
            db_kind: None,
            words: None,
            stats_refresh: StatsRefresh::default(),
        }
    }

    pub fn with_env(mut self, runtime: RuntimeEnv) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_words(mut self, words: WordSource) -> Self {
        self.words = Some(words);
        self
    }

    pub fn with_stats_refresh(mut self, mode: StatsRefresh) -> Self {
        self.stats_refresh = mode;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let words = match self.words {
            Some(words) => words,
            None => WordSource::builtin(None)?,
        };
        let db = match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => Some(bootstrap_db(self.runtime, kind).await?),
            None => None,
        };
        Ok(AppState::new(db, Arc::new(words), self.stats_refresh))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
