//! DTOs for scores_sea adapter.

use time::Date;

/// DTO for recording the final score of a game.
#[derive(Debug, Clone)]
pub struct ScoreCreate {
    pub user_id: i64,
    pub game_id: i64,
    pub date: Date,
    pub won: bool,
    pub score: i32,
}
