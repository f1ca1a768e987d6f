//! CLI command definitions using clap

use crate::models::CompletionFilter;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Personal task tracking backed by a SQLite database
#[derive(Parser, Debug)]
#[command(name = "tasklite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task database
    #[arg(long, global = true, default_value = "tasks.db")]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the task database if it does not exist
    Init,

    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Free-form note attached to the task
        #[arg(long)]
        note: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },

    /// Remove a task
    Remove {
        /// Task ID
        id: i64,
    },

    /// Mark a task as completed
    Complete {
        /// Task ID
        id: i64,
    },

    /// List tasks
    List {
        /// Show only completed (yes) or only incomplete (no) tasks
        #[arg(long, value_parser = parse_filter)]
        completed: Option<CompletionFilter>,
    },

    /// Search tasks with a case-insensitive regex
    Search {
        /// Pattern matched against title and note
        pattern: String,
    },

    /// Export all tasks to a CSV file
    ExportCsv {
        /// Output file path
        out: PathBuf,
    },

    /// Import tasks from a CSV file
    ImportCsv {
        /// Input file path
        infile: PathBuf,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date: {}", e))
}

fn parse_filter(s: &str) -> Result<CompletionFilter, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-08-10").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
        );
        assert!(parse_date("2024-13-40").is_err());
        assert!(parse_date("tomorrow").is_err());
        assert!(parse_date("2024/01/01").is_err());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("yes").unwrap(), CompletionFilter::OnlyCompleted);
        assert_eq!(parse_filter("no").unwrap(), CompletionFilter::OnlyIncomplete);
        assert!(parse_filter("all").is_err());
    }
}
