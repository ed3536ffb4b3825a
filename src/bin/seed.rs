//! Seed utility
//!
//! Applies migrations and inserts the fixed sample members. Idempotent:
//! existing member numbers are skipped.

use member_registry::{config::Config, db, seed};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env();
    let pool = db::connect(&config.database.url, config.database.max_connections).await?;
    db::run_migrations(&pool).await?;

    let inserted = seed::seed_members(&pool).await?;
    info!(
        "Seed completed: {} inserted, {} skipped",
        inserted,
        seed::SEED_MEMBERS.len() as u64 - inserted
    );

    Ok(())
}
