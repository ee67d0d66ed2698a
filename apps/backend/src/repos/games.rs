//! Game repository functions (generic over ConnectionTrait).
//!
//! Converts between stored rows and the domain `GameState`.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::domain::game::{GameState, GameStatus};
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// A stored game with its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub state: GameState,
}

impl From<games::GameStatus> for GameStatus {
    fn from(status: games::GameStatus) -> Self {
        match status {
            games::GameStatus::InProgress => GameStatus::InProgress,
            games::GameStatus::Won => GameStatus::Won,
            games::GameStatus::Lost => GameStatus::Lost,
        }
    }
}

impl From<GameStatus> for games::GameStatus {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => games::GameStatus::InProgress,
            GameStatus::Won => games::GameStatus::Won,
            GameStatus::Lost => games::GameStatus::Lost,
        }
    }
}

fn game_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Game, "Game not found!")
}

fn attempts_column(value: i16, column: &str) -> Result<u8, DomainError> {
    u8::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("games.{column} out of range: {value}"),
        )
    })
}

fn to_state(model: &games::Model, moves: Vec<String>) -> Result<GameState, DomainError> {
    GameState::restore(
        model.target.clone(),
        model.current.clone(),
        attempts_column(model.attempts_allowed, "attempts_allowed")?,
        attempts_column(model.attempts_remaining, "attempts_remaining")?,
        model.status.into(),
        moves,
    )
}

/// Insert a new game and its genesis log entries.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    user_name: &str,
    state: GameState,
) -> Result<GameRecord, DomainError> {
    let dto = games_adapter::GameCreate::new(
        user_id,
        state.target(),
        state.current(),
        i16::from(state.attempts_allowed()),
    );
    let model = games_adapter::create_game(conn, dto).await?;

    for (move_no, entry) in state.moves().iter().enumerate() {
        games_adapter::append_move(conn, model.id, move_no as i32, entry.clone()).await?;
    }

    Ok(GameRecord {
        id: model.id,
        user_id,
        user_name: user_name.to_string(),
        state,
    })
}

/// Load a game with its owner and full move log.
pub async fn load_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<GameRecord, DomainError> {
    let (model, owner) = games_adapter::find_with_owner(conn, id)
        .await?
        .ok_or_else(game_not_found)?;
    let owner = owner.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("game {id} has no owner"),
        )
    })?;
    let moves = games_adapter::list_moves(conn, id).await?;

    Ok(GameRecord {
        id: model.id,
        user_id: model.user_id,
        user_name: owner.name,
        state: to_state(&model, moves)?,
    })
}

/// All games of one user, oldest first. Move logs are fetched in one query.
pub async fn list_user_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    user_name: &str,
) -> Result<Vec<GameRecord>, DomainError> {
    let models = games_adapter::list_by_user(conn, user_id).await?;
    let ids = models.iter().map(|m| m.id).collect();

    let mut logs: HashMap<i64, Vec<String>> = HashMap::new();
    for (game_id, entry) in games_adapter::list_moves_for_games(conn, ids).await? {
        logs.entry(game_id).or_default().push(entry);
    }

    models
        .into_iter()
        .map(|model| {
            let moves = logs.remove(&model.id).unwrap_or_default();
            Ok(GameRecord {
                id: model.id,
                user_id,
                user_name: user_name.to_string(),
                state: to_state(&model, moves)?,
            })
        })
        .collect()
}

pub async fn move_history<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Vec<String>, DomainError> {
    if games_adapter::find_by_id(conn, id).await?.is_none() {
        return Err(game_not_found());
    }
    Ok(games_adapter::list_moves(conn, id).await?)
}

/// Persist the state after one applied guess: progress columns plus the
/// newest log entry. Fails with `Conflict(GameFinished)` if the stored row
/// is no longer in progress.
pub async fn record_guess<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    record: &GameRecord,
) -> Result<(), DomainError> {
    let state = &record.state;
    let update = games_adapter::GameProgressUpdate::new(
        record.id,
        state.current(),
        i16::from(state.attempts_remaining()),
        state.status().into(),
    );
    games_adapter::update_progress(conn, update).await?;

    if let Some(entry) = state.moves().last() {
        let move_no = (state.moves().len() - 1) as i32;
        games_adapter::append_move(conn, record.id, move_no, entry.clone()).await?;
    }
    Ok(())
}

pub async fn delete_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    games_adapter::delete_in_progress(conn, id).await?;
    Ok(())
}

/// Remaining attempts of every in-progress game.
pub async fn in_progress_remaining<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<u8>, DomainError> {
    let rows = games_adapter::in_progress_remaining(conn).await?;
    rows.into_iter()
        .map(|r| attempts_column(r, "attempts_remaining"))
        .collect()
}
