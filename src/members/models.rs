//! Member data model
//!
//! Defines the persisted member entity and the request payload shared by
//! create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered member
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Store-assigned primary key, immutable once assigned
    pub id: i64,
    /// User-supplied member number, unique across all members
    pub member_no: String,
    /// Member display name
    pub name: String,
    /// When the member was created
    pub created_at: DateTime<Utc>,
    /// When the member was last updated (equals `created_at` until the first
    /// update)
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating a member
///
/// Both operations replace the full record; there is no partial-field update.
/// Missing fields deserialize as empty strings and are rejected by the
/// service's validation.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberPayload {
    /// Member number to assign
    #[serde(default)]
    pub member_no: String,
    /// Display name to assign
    #[serde(default)]
    pub name: String,
}
