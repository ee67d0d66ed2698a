//! Hangman game state machine.
//!
//! A `GameState` is created in progress, mutated only through
//! [`GameState::apply_guess`], and frozen once it reaches `Won` or `Lost`.

use std::fmt;

use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// Character used for unrevealed positions.
pub const MASK: char = '*';
/// Hard cap on attempts per game; also the constant in the score formula.
pub const MAX_ATTEMPTS: u8 = 14;
pub const DEFAULT_ATTEMPTS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Won => "WON",
            GameStatus::Lost => "LOST",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one call to [`GameState::apply_guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
    Won,
    /// Attempts ran out; `hit` records whether the last guess revealed anything.
    Lost { hit: bool },
    /// The game was already terminal; nothing changed.
    AlreadyOver,
}

impl GuessOutcome {
    /// Message shown to the player alongside the game view.
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::Hit => "Bingo!",
            GuessOutcome::Miss => "You missed!",
            GuessOutcome::Won => "You win!",
            GuessOutcome::Lost { hit: true } => "Bingo! Game over!",
            GuessOutcome::Lost { hit: false } => "You missed! Game over!",
            GuessOutcome::AlreadyOver => "Game already over!",
        }
    }

    /// `Some(won)` when this guess ended the game.
    pub fn finished(self) -> Option<bool> {
        match self {
            GuessOutcome::Won => Some(true),
            GuessOutcome::Lost { .. } => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: String,
    current: String,
    attempts_allowed: u8,
    attempts_remaining: u8,
    status: GameStatus,
    moves: Vec<String>,
}

impl GameState {
    /// Check a requested attempt count against `1..=MAX_ATTEMPTS`.
    pub fn validate_attempts(attempts: i64) -> Result<u8, DomainError> {
        match u8::try_from(attempts) {
            Ok(a) if (1..=MAX_ATTEMPTS).contains(&a) => Ok(a),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidAttempts,
                format!("Attempts must be between 1 and {MAX_ATTEMPTS}, got {attempts}"),
            )),
        }
    }

    /// Start a new game. The genesis log entry names the owner.
    pub fn new(
        owner_name: &str,
        attempts: u8,
        target: String,
        pattern: String,
    ) -> Result<Self, DomainError> {
        let attempts = Self::validate_attempts(i64::from(attempts))?;
        if target.is_empty() || pattern.chars().count() != target.chars().count() {
            return Err(DomainError::validation(
                ValidationKind::Other("Pattern".into()),
                "pattern length must match a non-empty target",
            ));
        }
        if pattern.chars().any(|c| c != MASK) {
            return Err(DomainError::validation(
                ValidationKind::Other("Pattern".into()),
                "initial pattern must be fully masked",
            ));
        }

        Ok(Self {
            target,
            current: pattern,
            attempts_allowed: attempts,
            attempts_remaining: attempts,
            status: GameStatus::InProgress,
            moves: vec![format!("{owner_name} created a new game")],
        })
    }

    /// Rebuild a game from stored parts, rejecting any combination the
    /// state machine could never have produced.
    pub fn restore(
        target: String,
        current: String,
        attempts_allowed: u8,
        attempts_remaining: u8,
        status: GameStatus,
        moves: Vec<String>,
    ) -> Result<Self, DomainError> {
        let corrupt = |what: &str| {
            Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("stored game is inconsistent: {what}"),
            ))
        };

        if target.is_empty() || current.chars().count() != target.chars().count() {
            return corrupt("pattern length differs from target");
        }
        let pattern_fits = current
            .chars()
            .zip(target.chars())
            .all(|(c, t)| c == MASK || c == t);
        if !pattern_fits {
            return corrupt("pattern reveals letters not in target");
        }
        if !(1..=MAX_ATTEMPTS).contains(&attempts_allowed) || attempts_remaining > attempts_allowed
        {
            return corrupt("attempts out of range");
        }
        let solved = current == target;
        let status_fits = match status {
            GameStatus::Won => solved,
            GameStatus::Lost => !solved && attempts_remaining == 0,
            GameStatus::InProgress => !solved && attempts_remaining > 0,
        };
        if !status_fits {
            return corrupt("status does not match pattern and attempts");
        }

        Ok(Self {
            target,
            current,
            attempts_allowed,
            attempts_remaining,
            status,
            moves,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn attempts_allowed(&self) -> u8 {
        self.attempts_allowed
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Apply one guess.
    ///
    /// A terminal game is left untouched and reports `AlreadyOver`. A guess
    /// that is not exactly one character fails without costing an attempt.
    /// Every other guess costs one attempt, including repeats. A guess that
    /// completes the word wins even if it also used the last attempt.
    pub fn apply_guess(&mut self, guess: &str) -> Result<GuessOutcome, DomainError> {
        if self.is_over() {
            return Ok(GuessOutcome::AlreadyOver);
        }

        let mut chars = guess.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidGuess,
                    "Only one letter each guess!",
                ))
            }
        };
        // A letter whose lowercase form is several chars ('İ') matches nothing.
        let letter = {
            let mut lower = letter.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        };

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        let mut hit = false;
        self.current = self
            .target
            .chars()
            .zip(self.current.chars())
            .map(|(t, c)| {
                if Some(t) == letter {
                    hit = true;
                    t
                } else {
                    c
                }
            })
            .collect();

        let outcome = if self.current == self.target {
            self.status = GameStatus::Won;
            GuessOutcome::Won
        } else if self.attempts_remaining == 0 {
            self.status = GameStatus::Lost;
            GuessOutcome::Lost { hit }
        } else if hit {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        };

        let tag = match outcome {
            GuessOutcome::Won => "You win!",
            GuessOutcome::Hit | GuessOutcome::Lost { hit: true } => "Bingo!",
            _ => "You missed!!",
        };
        self.moves.push(format!(
            "made a guess: '{guess}', result: {}, {tag}",
            self.current
        ));

        Ok(outcome)
    }
}
