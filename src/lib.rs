//! Random Data Browser
//!
//! Browses, searches and prices records from the public random-data API,
//! with a per-category cache and a shared page-size setting.

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use client::Browser;
pub use config::Config;
pub use error::{BrowseError, Result};
pub use tasks::spawn_cleanup_task;
