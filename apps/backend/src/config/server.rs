//! Server settings read from the environment at startup.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::db::DbKind;
use crate::domain::words::{parse_word_list, WordSource};
use crate::error::AppError;

/// How the average-attempts refresh runs after a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsRefresh {
    /// Spawned on the runtime; the request does not wait
    #[default]
    Background,
    /// Awaited before the response, still best-effort
    Inline,
}

impl FromStr for StatsRefresh {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "background" => Ok(StatsRefresh::Background),
            "inline" => Ok(StatsRefresh::Inline),
            other => Err(AppError::config(format!(
                "HANGMAN_STATS_REFRESH must be background or inline, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub wordlist: Option<PathBuf>,
    pub stats_refresh: StatsRefresh,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HANGMAN_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("HANGMAN_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("HANGMAN_PORT must be a port number, got '{raw}'"))
            })?,
            None => 3001,
        };
        let db_kind = match lookup("HANGMAN_DB") {
            Some(raw) => raw.parse()?,
            None => DbKind::Postgres,
        };
        let stats_refresh = match lookup("HANGMAN_STATS_REFRESH") {
            Some(raw) => raw.parse()?,
            None => StatsRefresh::default(),
        };
        let wordlist = lookup("HANGMAN_WORDLIST")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            db_kind,
            wordlist,
            stats_refresh,
        })
    }

    /// The configured vocabulary, or the embedded one.
    pub fn load_words(&self) -> Result<WordSource, AppError> {
        let source = match &self.wordlist {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    AppError::config(format!("cannot read word list {}: {e}", path.display()))
                })?;
                WordSource::from_words(parse_word_list(&content)?, None)?
            }
            None => WordSource::builtin(None)?,
        };
        Ok(source)
    }
}
