//! tasklite - personal task tracking backed by SQLite
//!
//! This library provides the core functionality for managing tasks stored
//! in a single-table SQLite database.

pub mod cli;
pub mod models;
pub mod storage;

pub use models::{CompletionFilter, Task};
pub use storage::{StoreError, TaskStore};
