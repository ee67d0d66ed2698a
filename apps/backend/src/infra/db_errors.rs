//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert through `map_db_err`
//! (or the `From` impl below) so nothing above them sees a raw `DbErr`.

use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Parse the id out of a structured `PREFIX:<id>` adapter error.
fn structured_game_id(msg: &str, prefix: &str) -> Option<i64> {
    msg.strip_prefix(prefix)?.parse::<i64>().ok()
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

/// Which unique constraint tripped, by SQLite `table.column` or Postgres index name.
fn unique_conflict(msg: &str) -> (ConflictKind, &'static str) {
    if msg.contains("users.name") || msg.contains("ux_users_name") {
        return (ConflictKind::UserNameTaken, "A User with that name already exists!");
    }
    if msg.contains("scores.game_id") || msg.contains("ux_scores_game_id") {
        return (ConflictKind::GameFinished, "Game already has a score");
    }
    if msg.contains("game_moves.game_id") || msg.contains("ux_game_moves_game_move_no") {
        return (
            ConflictKind::Other("MoveNo".into()),
            "Move log was written concurrently",
        );
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError` with PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("GAME_NOT_FOUND:") => {
            let game_id = structured_game_id(msg, "GAME_NOT_FOUND:");
            warn!(trace_id = %trace_id, ?game_id, "Game not found");
            return DomainError::not_found(NotFoundKind::Game, "Game not found!");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("GAME_FINISHED:") => {
            let game_id = structured_game_id(msg, "GAME_FINISHED:");
            warn!(trace_id = %trace_id, ?game_id, "Write rejected: game already finished");
            return DomainError::conflict(ConflictKind::GameFinished, "Game already over!");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        let (kind, detail) = unique_conflict(&error_msg);
        return DomainError::conflict(kind, detail);
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation(
            ValidationKind::Other("ForeignKey".into()),
            "Foreign key constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
