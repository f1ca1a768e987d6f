//! Storage layer for the task database

pub mod csv;
pub mod task_store;

pub use task_store::{StoreError, TaskStore};
