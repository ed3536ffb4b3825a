//! Seed data
//!
//! Inserts a fixed set of sample members, skipping any member_no that
//! already exists. Safe to run any number of times.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

/// The fixed sample records inserted by the seed utility
pub const SEED_MEMBERS: &[(&str, &str)] = &[
    ("M001", "Taro Yamada"),
    ("M002", "Hanako Sato"),
    ("M003", "Ichiro Suzuki"),
];

/// Insert the sample members, skipping on conflict. Returns how many rows
/// were actually inserted.
pub async fn seed_members(pool: &SqlitePool) -> anyhow::Result<u64> {
    let mut inserted = 0;

    for (member_no, name) in SEED_MEMBERS {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO members (member_no, name, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(member_no) DO NOTHING",
        )
        .bind(member_no)
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
            info!("Inserted seed member: {} - {}", member_no, name);
        } else {
            info!("Skipped seed member (already exists): {}", member_no);
        }
    }

    Ok(inserted)
}
