//! Member service
//!
//! Validates request payloads, delegates to the store, and translates store
//! outcomes into API-level results. The service itself is stateless; the
//! store is the only shared resource.

use std::sync::Arc;

use crate::error::AppError;
use crate::members::models::{Member, MemberPayload};
use crate::members::store::MemberStore;

/// Validation/translation layer between API requests and the member store
#[derive(Clone)]
pub struct MemberService {
    store: Arc<dyn MemberStore>,
}

impl MemberService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    /// List all members, ordered ascending by member_no
    pub async fn list(&self) -> Result<Vec<Member>, AppError> {
        Ok(self.store.list().await?)
    }

    /// Fetch a single member by id
    pub async fn get(&self, id: i64) -> Result<Member, AppError> {
        Ok(self.store.get(id).await?)
    }

    /// Create a member from a validated payload
    pub async fn create(&self, payload: &MemberPayload) -> Result<Member, AppError> {
        let (member_no, name) = validated(payload)?;
        Ok(self.store.insert(member_no, name).await?)
    }

    /// Replace both fields on an existing member
    pub async fn update(&self, id: i64, payload: &MemberPayload) -> Result<Member, AppError> {
        let (member_no, name) = validated(payload)?;
        Ok(self.store.update(id, member_no, name).await?)
    }

    /// Delete a member by id
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        Ok(self.store.delete(id).await?)
    }
}

/// Trim both fields and reject the request before it reaches the store if
/// either is empty.
fn validated(payload: &MemberPayload) -> Result<(&str, &str), AppError> {
    let member_no = payload.member_no.trim();
    let name = payload.name.trim();

    if member_no.is_empty() || name.is_empty() {
        return Err(AppError::Validation(
            "member_no and name are required".to_string(),
        ));
    }

    Ok((member_no, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(member_no: &str, name: &str) -> MemberPayload {
        MemberPayload {
            member_no: member_no.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn accepts_non_empty_trimmed_fields() {
        let p = payload("  M001  ", " Taro Yamada ");
        let (member_no, name) = validated(&p).unwrap();
        assert_eq!(member_no, "M001");
        assert_eq!(name, "Taro Yamada");
    }

    #[test]
    fn rejects_empty_member_no() {
        let err = validated(&payload("", "Taro Yamada")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "member_no and name are required");
    }

    #[test]
    fn rejects_whitespace_only_name() {
        let err = validated(&payload("M001", "   ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_both_fields_missing() {
        assert!(validated(&payload("", "")).is_err());
    }
}
