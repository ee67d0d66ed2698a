use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Open a connection pool. Does NOT run migrations.
pub async fn connect_db(runtime: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(runtime, kind)?;

    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);
    if kind == DbKind::SqliteMemory {
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    info!(engine = engine(kind), ?runtime, "database connected");
    Ok(conn)
}

/// Connect and apply pending migrations.
pub async fn bootstrap_db(
    runtime: RuntimeEnv,
    kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(runtime, kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
