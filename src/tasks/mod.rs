//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache expiry: drops cached categories older than the configured max age

mod cleanup;

pub use cleanup::{spawn_cleanup_task, spawn_cleanup_task_every};
