//! Database connection and migrations
//!
//! Builds the SQLite connection pool used for member storage and applies the
//! schema migration at startup. The pool is the only process-wide resource;
//! it is created once in `main` and dropped on shutdown.

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Connect to the SQLite database, creating the file (and its parent
/// directory) if missing.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    if path != ":memory:" {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create db directory {:?}", parent))?;
            }
        }
    }

    // SQLite connection string format: sqlite:path/to/db.db
    let connection_string = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{}", database_url)
    };

    let options = SqliteConnectOptions::from_str(&connection_string)
        .context("invalid database URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("failed to connect to database")?;

    info!("Connected to SQLite database at: {}", database_url);

    Ok(pool)
}

/// Run the schema migration
///
/// The migration file only contains `IF NOT EXISTS` statements, so running
/// this on every startup is idempotent.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    info!("Running database migrations...");

    let migration_sql = include_str!("../migrations/001_create_members.sql");

    // Strip comment lines, then execute statement by statement
    let cleaned: String = migration_sql
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    for statement in cleaned.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("migration statement failed: {}", statement))?;
    }

    info!("Database migrations completed successfully");
    Ok(())
}
