use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which database name a connection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Test databases must be named `*_test`
    Test,
}

/// Storage backend selected by `HANGMAN_DB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// One pooled connection, so every query sees the same database
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "HANGMAN_DB must be postgres, sqlite-file or sqlite-memory, got '{other}'"
            ))),
        }
    }
}

/// Build a database URL from the process environment.
pub fn db_url(runtime: RuntimeEnv, kind: DbKind) -> Result<String, AppError> {
    db_url_with(runtime, kind, |name| env::var(name).ok())
}

/// Build a database URL, reading variables through `lookup`.
pub fn db_url_with(
    runtime: RuntimeEnv,
    kind: DbKind,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = db_name(runtime, &lookup)?;
            let username = must_var(&lookup, "APP_DB_USER")?;
            let password = must_var(&lookup, "APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let default_path = match runtime {
                RuntimeEnv::Prod => "hangman.db",
                RuntimeEnv::Test => "hangman_test.db",
            };
            let path = lookup("HANGMAN_SQLITE_PATH").unwrap_or_else(|| default_path.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

fn db_name(runtime: RuntimeEnv, lookup: &impl Fn(&str) -> Option<String>) -> Result<String, AppError> {
    match runtime {
        RuntimeEnv::Prod => must_var(lookup, "PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var(lookup, "TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test runtime requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn must_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, AppError> {
    lookup(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
