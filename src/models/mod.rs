//! Data models for tasklite

pub mod task;

pub use task::{CompletionFilter, Task};
