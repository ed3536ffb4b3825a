//! Member persistence
//!
//! `MemberStore` is the storage contract: it owns id assignment and
//! uniqueness enforcement and surfaces constraint violations as typed
//! outcomes, so callers never inspect driver-specific error codes. The
//! shipped implementation is SQLite-backed; the trait keeps the pooled
//! relational backend swappable.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;

use crate::members::models::Member;

/// Typed storage outcomes
#[derive(Error, Debug)]
pub enum StoreError {
    /// No row matches the requested id
    #[error("no member with the requested id")]
    NotFound,

    /// The write would duplicate an existing member_no
    #[error("member_no already exists")]
    UniqueViolation,

    /// Any other driver failure (connectivity, corruption, ...)
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Storage contract for member records
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// All members, ordered ascending by `member_no`
    async fn list(&self) -> Result<Vec<Member>, StoreError>;

    /// Look up a member by primary key
    async fn get(&self, id: i64) -> Result<Member, StoreError>;

    /// Persist a new member; the store assigns the id and both timestamps
    async fn insert(&self, member_no: &str, name: &str) -> Result<Member, StoreError>;

    /// Replace both fields on an existing member and refresh `updated_at`
    async fn update(&self, id: i64, member_no: &str, name: &str) -> Result<Member, StoreError>;

    /// Physically remove a member
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

/// SQLite-backed member store
pub struct SqliteMemberStore {
    pool: SqlitePool,
}

impl SqliteMemberStore {
    /// Wrap an already-connected pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Classify a write failure: unique-constraint violations become
/// `UniqueViolation`, everything else stays a database error.
fn classify_write_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::UniqueViolation
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl MemberStore for SqliteMemberStore {
    async fn list(&self) -> Result<Vec<Member>, StoreError> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, member_no, name, created_at, updated_at FROM members ORDER BY member_no ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn get(&self, id: i64) -> Result<Member, StoreError> {
        sqlx::query_as::<_, Member>(
            "SELECT id, member_no, name, created_at, updated_at FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, member_no: &str, name: &str) -> Result<Member, StoreError> {
        let now = Utc::now();
        let member = sqlx::query_as::<_, Member>(
            "INSERT INTO members (member_no, name, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, member_no, name, created_at, updated_at",
        )
        .bind(member_no)
        .bind(name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_write_error)?;

        debug!(member_no = %member.member_no, id = member.id, "Inserted member");
        Ok(member)
    }

    async fn update(&self, id: i64, member_no: &str, name: &str) -> Result<Member, StoreError> {
        // Updating a row to its own member_no is not a violation: the UNIQUE
        // constraint only fires when a *different* row holds the value.
        let member = sqlx::query_as::<_, Member>(
            "UPDATE members SET member_no = ?, name = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, member_no, name, created_at, updated_at",
        )
        .bind(member_no)
        .bind(name)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify_write_error)?
        .ok_or(StoreError::NotFound)?;

        debug!(id, "Updated member");
        Ok(member)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        debug!(id, "Deleted member");
        Ok(())
    }
}
