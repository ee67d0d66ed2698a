use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::scoring::FinalScore;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::GameRecord;
use crate::repos::scores::{self as scores_repo, ScoreRecord};
use crate::repos::users as users_repo;

/// Records final scores and answers score queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreLedger;

impl ScoreLedger {
    pub fn new() -> Self {
        Self
    }

    /// Write the one score of a game that has just ended, dated today (UTC).
    pub async fn finalize<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game: &GameRecord,
    ) -> Result<FinalScore, AppError> {
        let final_score = FinalScore::for_game(&game.state).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::Other("GameInProgress".into()),
                format!("game {} has not ended", game.id),
            )
        })?;

        let today = OffsetDateTime::now_utc().date();
        scores_repo::create_score(conn, game.user_id, game.id, today, final_score).await?;

        info!(
            game_id = game.id,
            user_name = %game.user_name,
            won = final_score.won,
            score = final_score.score,
            "Game finished"
        );
        Ok(final_score)
    }

    pub async fn list_all<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<ScoreRecord>, AppError> {
        Ok(scores_repo::list_all(conn).await?)
    }

    /// Highest scores first; `limit <= 0` means no cap.
    pub async fn top<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        limit: i64,
    ) -> Result<Vec<ScoreRecord>, AppError> {
        let cap = u64::try_from(limit).ok().filter(|&n| n > 0);
        Ok(scores_repo::list_top(conn, cap).await?)
    }

    pub async fn by_user<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_name: &str,
    ) -> Result<Vec<ScoreRecord>, AppError> {
        let user = users_repo::require_user_by_name(conn, user_name).await?;
        Ok(scores_repo::list_by_user(conn, user.id, &user.name).await?)
    }
}
