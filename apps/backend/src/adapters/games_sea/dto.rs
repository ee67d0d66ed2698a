//! DTOs for games_sea adapter.

use crate::entities::games::GameStatus;

/// DTO for inserting a freshly started game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub user_id: i64,
    pub target: String,
    pub current: String,
    pub attempts_allowed: i16,
}

impl GameCreate {
    pub fn new(
        user_id: i64,
        target: impl Into<String>,
        current: impl Into<String>,
        attempts_allowed: i16,
    ) -> Self {
        Self {
            user_id,
            target: target.into(),
            current: current.into(),
            attempts_allowed,
        }
    }
}

/// DTO for writing the result of one guess.
#[derive(Debug, Clone)]
pub struct GameProgressUpdate {
    pub id: i64,
    pub current: String,
    pub attempts_remaining: i16,
    pub status: GameStatus,
}

impl GameProgressUpdate {
    pub fn new(id: i64, current: impl Into<String>, attempts_remaining: i16, status: GameStatus) -> Self {
        Self {
            id,
            current: current.into(),
            attempts_remaining,
            status,
        }
    }
}
