//! Member Registry Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod members;
pub mod pages;
pub mod seed;
