//! Task model and related types

use chrono::NaiveDate;
use std::fmt;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Store-assigned row id, the external handle for remove/complete
    pub id: i64,
    /// Required title, never empty
    pub title: String,
    /// Optional free-form note
    pub note: Option<String>,
    /// Date the task was created, set once
    pub created_at: NaiveDate,
    /// Optional due date
    pub due: Option<NaiveDate>,
    /// Whether the task has been completed
    pub completed: bool,
}

/// List-narrowing criterion by completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    OnlyCompleted,
    OnlyIncomplete,
}

impl fmt::Display for CompletionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionFilter::All => write!(f, "all"),
            CompletionFilter::OnlyCompleted => write!(f, "completed"),
            CompletionFilter::OnlyIncomplete => write!(f, "incomplete"),
        }
    }
}

impl std::str::FromStr for CompletionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(CompletionFilter::OnlyCompleted),
            "no" => Ok(CompletionFilter::OnlyIncomplete),
            _ => Err(format!("Expected 'yes' or 'no', got: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_filter_display() {
        assert_eq!(CompletionFilter::All.to_string(), "all");
        assert_eq!(CompletionFilter::OnlyCompleted.to_string(), "completed");
        assert_eq!(CompletionFilter::OnlyIncomplete.to_string(), "incomplete");
    }

    #[test]
    fn test_completion_filter_parse() {
        assert_eq!(
            "yes".parse::<CompletionFilter>().unwrap(),
            CompletionFilter::OnlyCompleted
        );
        assert_eq!(
            "no".parse::<CompletionFilter>().unwrap(),
            CompletionFilter::OnlyIncomplete
        );
        assert_eq!(
            "YES".parse::<CompletionFilter>().unwrap(),
            CompletionFilter::OnlyCompleted
        );
        assert!("maybe".parse::<CompletionFilter>().is_err());
        assert!("".parse::<CompletionFilter>().is_err());
    }

    #[test]
    fn test_completion_filter_default() {
        assert_eq!(CompletionFilter::default(), CompletionFilter::All);
    }
}
