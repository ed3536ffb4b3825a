//! API module
//!
//! Contains HTTP request handlers for the member management endpoints

pub mod members;
