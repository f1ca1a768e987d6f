//! CSV row (de)serialization for export and import

use crate::models::Task;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row written by `export-csv`, column order `title,note,due,completed`
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub title: &'a str,
    pub note: Option<&'a str>,
    pub due: Option<NaiveDate>,
    /// Serialized as literal `0`/`1`
    pub completed: u8,
}

impl<'a> From<&'a Task> for ExportRow<'a> {
    fn from(task: &'a Task) -> Self {
        ExportRow {
            title: &task.title,
            note: task.note.as_deref(),
            due: task.due,
            completed: u8::from(task.completed),
        }
    }
}

/// Row read by `import-csv`. Every column except `title` may be missing;
/// `completed` stays raw text so that only a literal `"1"` marks a task done.
#[derive(Debug, Deserialize)]
pub struct ImportRow {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub completed: Option<String>,
}

impl ImportRow {
    /// Rows without a title are not importable
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Parse the `due` column, treating an empty or absent value as no due date
    pub fn parsed_due(&self) -> Result<Option<NaiveDate>, chrono::ParseError> {
        match self.due.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Some),
            None => Ok(None),
        }
    }

    /// A task is imported as completed only when the column is exactly `"1"`
    pub fn is_completed(&self) -> bool {
        self.completed.as_deref() == Some("1")
    }
}
