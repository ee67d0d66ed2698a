use super::game::{GameState, MAX_ATTEMPTS};

/// Score earned by a finished game: `len(target) + 14 - attempts_remaining`.
pub fn final_score(target_len: usize, attempts_remaining: u8) -> i32 {
    let len = i32::try_from(target_len).unwrap_or(i32::MAX - i32::from(MAX_ATTEMPTS));
    len + i32::from(MAX_ATTEMPTS) - i32::from(attempts_remaining)
}

/// Outcome and score to record for a game that has just ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub won: bool,
    pub score: i32,
}

impl FinalScore {
    /// `None` while the game is still in progress.
    pub fn for_game(game: &GameState) -> Option<Self> {
        if !game.is_over() {
            return None;
        }
        Some(Self {
            won: game.status() == super::game::GameStatus::Won,
            score: final_score(game.target().chars().count(), game.attempts_remaining()),
        })
    }
}
