//! Domain layer: pure hangman logic, no I/O.

pub mod game;
pub mod scoring;
pub mod stats;
pub mod vocabulary;
pub mod words;

#[cfg(test)]
mod tests_stats;

pub use game::{GameState, GameStatus, GuessOutcome, DEFAULT_ATTEMPTS, MASK, MAX_ATTEMPTS};
pub use scoring::{final_score, FinalScore};
pub use words::WordSource;
