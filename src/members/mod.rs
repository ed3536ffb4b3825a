//! Member domain
//!
//! Data model, persistence contract, and the service layer that validates
//! input and translates store outcomes into API results.

pub mod models;
pub mod service;
pub mod store;

pub use models::{Member, MemberPayload};
pub use service::MemberService;
