//! Cross-game statistics: the cached average of remaining attempts and
//! per-user performance rankings.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::{debug, info, warn};

use crate::config::server::StatsRefresh;
use crate::domain::stats::{average_remaining, format_average_message, performance, rank_descending};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::scratch_cache::{ScratchCache, AVERAGE_ATTEMPTS_KEY};
use crate::repos::users::User;
use crate::repos::{games as games_repo, scores as scores_repo, users as users_repo};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Clone, Copy)]
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Recompute the average over in-progress games and cache the message.
    /// With no in-progress games the cached value is left as it was.
    pub async fn refresh_average<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        cache: &ScratchCache,
    ) -> Result<Option<String>, AppError> {
        let remaining = games_repo::in_progress_remaining(conn).await?;
        let Some(average) = average_remaining(&remaining) else {
            debug!("No in-progress games; average left unchanged");
            return Ok(None);
        };
        let message = format_average_message(average);
        cache.set(AVERAGE_ATTEMPTS_KEY, message.clone());
        debug!(games = remaining.len(), %message, "Average attempts refreshed");
        Ok(Some(message))
    }

    /// The cached message, or `""` before the first refresh.
    pub fn cached_average(&self, cache: &ScratchCache) -> String {
        cache.get(AVERAGE_ATTEMPTS_KEY).unwrap_or_default()
    }

    /// Recompute and store every user's performance, then return users
    /// ordered by performance, highest first.
    pub async fn rankings<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, AppError> {
        let mut users = users_repo::list_users(conn).await?;
        if users.is_empty() {
            return Err(DomainError::not_found(NotFoundKind::Users, "No User exists!").into());
        }

        let mut by_user: HashMap<i64, Vec<i32>> = HashMap::new();
        for (user_id, score) in scores_repo::user_score_pairs(conn).await? {
            by_user.entry(user_id).or_default().push(score);
        }

        for user in &mut users {
            let scores = by_user.get(&user.id).map(Vec::as_slice).unwrap_or_default();
            user.performance = performance(scores);
            users_repo::update_performance(conn, user.id, user.performance).await?;
        }

        rank_descending(&mut users, |u| u.performance);
        info!(users = users.len(), "Rankings recomputed");
        Ok(users)
    }
}

async fn refresh_logged(db: DatabaseConnection, cache: std::sync::Arc<ScratchCache>) {
    if let Err(err) = StatsAggregator::new().refresh_average(&db, &cache).await {
        warn!(error = %err, "Average attempts refresh failed");
    }
}

/// Fire the average refresh after a game was created. Failures are
/// logged and never reach the caller.
pub async fn trigger_average_refresh(state: &AppState) {
    let Some(db) = state.db().cloned() else {
        warn!("Average attempts refresh skipped: no database");
        return;
    };
    let cache = state.cache.clone();

    match state.stats_refresh {
        StatsRefresh::Background => {
            tokio::spawn(refresh_logged(db, cache));
        }
        StatsRefresh::Inline => refresh_logged(db, cache).await,
    }
}
