//! JSON request and response bodies.

use serde::{Deserialize, Serialize};
use time::macros::format_description;

use crate::repos::games::GameRecord;
use crate::repos::scores::ScoreRecord;
use crate::repos::users::User;
use crate::utils::game_handle::GameHandle;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGameRequest {
    pub user_name: String,
    #[serde(default)]
    pub attempts: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MakeMoveRequest {
    pub guess: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighScoresQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageView {
    pub message: String,
}

impl MessageView {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub urlsafe_key: String,
    pub user_name: String,
    pub attempts_remaining: u8,
    pub current_word: String,
    pub status: String,
    pub game_over: bool,
    pub message: String,
}

impl GameView {
    pub fn from_record(record: &GameRecord, message: impl Into<String>) -> Self {
        let state = &record.state;
        Self {
            urlsafe_key: GameHandle::encode(record.id),
            user_name: record.user_name.clone(),
            attempts_remaining: state.attempts_remaining(),
            current_word: state.current().to_string(),
            status: state.status().as_str().to_string(),
            game_over: state.is_over(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamesView {
    pub games: Vec<GameView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovesView {
    pub moves: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub name: String,
    pub email: Option<String>,
    pub performance: f64,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            performance: user.performance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersView {
    pub users: Vec<UserView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub user_name: String,
    /// YYYY-MM-DD
    pub date: String,
    pub won: bool,
    pub score: i32,
}

impl From<ScoreRecord> for ScoreView {
    fn from(record: ScoreRecord) -> Self {
        let date = record
            .date
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| record.date.to_string());
        Self {
            user_name: record.user_name,
            date,
            won: record.won,
            score: record.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoresView {
    pub items: Vec<ScoreView>,
}

impl From<Vec<ScoreRecord>> for ScoresView {
    fn from(records: Vec<ScoreRecord>) -> Self {
        Self {
            items: records.into_iter().map(ScoreView::from).collect(),
        }
    }
}
