//! Error codes for the hangman backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the hangman backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Attempts outside 1..=14
    InvalidAttempts,
    /// Guess that is not exactly one character
    InvalidGuess,
    /// Game handle that does not decode
    InvalidGameHandle,
    /// Delete requested on a finished game
    GameAlreadyOver,
    /// General validation error
    ValidationError,
    /// Malformed request (e.g. unreadable JSON body)
    BadRequest,

    // Resource Not Found
    UserNotFound,
    GameNotFound,
    /// Rankings requested with no registered users
    NoUsers,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// User name already registered
    UserNameTaken,
    /// Write raced with the game finishing
    GameFinished,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidAttempts => "INVALID_ATTEMPTS",
            Self::InvalidGuess => "INVALID_GUESS",
            Self::InvalidGameHandle => "INVALID_GAME_HANDLE",
            Self::GameAlreadyOver => "GAME_ALREADY_OVER",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NoUsers => "NO_USERS",
            Self::NotFound => "NOT_FOUND",

            Self::UserNameTaken => "USER_NAME_TAKEN",
            Self::GameFinished => "GAME_FINISHED",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, for exhaustiveness checks in tests.
    pub const ALL: &'static [ErrorCode] = &[
        Self::InvalidAttempts,
        Self::InvalidGuess,
        Self::InvalidGameHandle,
        Self::GameAlreadyOver,
        Self::ValidationError,
        Self::BadRequest,
        Self::UserNotFound,
        Self::GameNotFound,
        Self::NoUsers,
        Self::NotFound,
        Self::UserNameTaken,
        Self::GameFinished,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::DataCorruption,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
