//! Game orchestration: load a game, hand it to the state machine, persist
//! the result, and finalize the score when the game ends.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::game::{GameState, GuessOutcome, DEFAULT_ATTEMPTS};
use crate::domain::words::WordSource;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::{self as games_repo, GameRecord};
use crate::repos::users as users_repo;
use crate::services::scores::ScoreLedger;

#[derive(Debug, Default, Clone, Copy)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Start a game for `user_name`. `attempts` defaults to 5.
    pub async fn new_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        words: &WordSource,
        user_name: &str,
        attempts: Option<i64>,
    ) -> Result<GameRecord, AppError> {
        let attempts = GameState::validate_attempts(attempts.unwrap_or(DEFAULT_ATTEMPTS))?;
        let user = users_repo::require_user_by_name(conn, user_name).await?;

        let (target, pattern) = words.pick()?;
        let state = GameState::new(&user.name, attempts, target, pattern)
            .map_err(|e| DomainError::config(format!("could not start a game: {e}")))?;

        let record = games_repo::create_game(conn, user.id, &user.name, state).await?;
        info!(
            game_id = record.id,
            user_name = %record.user_name,
            attempts,
            "Game created"
        );
        Ok(record)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<GameRecord, AppError> {
        Ok(games_repo::load_game(conn, game_id).await?)
    }

    /// The ordered move log, genesis entry first.
    pub async fn history<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Vec<String>, AppError> {
        Ok(games_repo::move_history(conn, game_id).await?)
    }

    /// Delete an in-progress game. Finished games cannot be deleted.
    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<(), AppError> {
        let record = games_repo::load_game(conn, game_id).await?;
        if record.state.is_over() {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyOver,
                "Game already over!",
            )
            .into());
        }

        games_repo::delete_in_progress(conn, game_id).await?;
        info!(game_id, user_name = %record.user_name, "Game deleted");
        Ok(())
    }

    pub async fn list_user_games<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_name: &str,
    ) -> Result<Vec<GameRecord>, AppError> {
        let user = users_repo::require_user_by_name(conn, user_name).await?;
        Ok(games_repo::list_user_games(conn, user.id, &user.name).await?)
    }

    /// Apply one guess. A finished game comes back unchanged with
    /// `GuessOutcome::AlreadyOver`; the score is written in the same
    /// connection/transaction as the move that ended the game.
    pub async fn make_move<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        guess: &str,
    ) -> Result<(GameRecord, GuessOutcome), AppError> {
        let mut record = games_repo::load_game(conn, game_id).await?;

        let outcome = record.state.apply_guess(guess)?;
        if outcome == GuessOutcome::AlreadyOver {
            debug!(game_id, "Guess on finished game ignored");
            return Ok((record, outcome));
        }

        games_repo::record_guess(conn, &record).await?;
        debug!(
            game_id,
            attempts_remaining = record.state.attempts_remaining(),
            ?outcome,
            "Guess applied"
        );

        if outcome.finished().is_some() {
            ScoreLedger::new().finalize(conn, &record).await?;
        }
        Ok((record, outcome))
    }
}
