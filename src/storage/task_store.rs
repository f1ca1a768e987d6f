//! SQLite-backed task storage

use crate::models::{CompletionFilter, Task};
use crate::storage::csv::{ExportRow, ImportRow};
use chrono::{NaiveDate, Utc};
use regex::RegexBuilder;
use rusqlite::{Connection, Row, params};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT NOT NULL,
    note       TEXT,
    created_at TEXT NOT NULL,
    due        TEXT,
    completed  INTEGER NOT NULL DEFAULT 0
)";
const INSERT_TASK: &str =
    "INSERT INTO tasks (title, note, created_at, due, completed) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COMPLETE_TASK: &str = "UPDATE tasks SET completed = 1 WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, note, created_at, due, completed FROM tasks";
const ORDER_TASKS: &str = "ORDER BY completed, due IS NULL, due";

/// Errors related to the task database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task database does not exist: {0}. Run 'tasklite init' first.")]
    NotInitialized(PathBuf),
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Single-table task store over a SQLite database file
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Create the task database and apply the schema. Safe to call on an
    /// existing database.
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        Ok(TaskStore { conn })
    }

    /// Open an existing task database, failing fast when the file is missing
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotInitialized(path.to_path_buf()));
        }
        Self::create(path)
    }

    /// Insert a new task and return it with its assigned id
    pub fn add(
        &self,
        title: &str,
        note: Option<&str>,
        due: Option<NaiveDate>,
    ) -> Result<Task, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let created_at = Utc::now().date_naive();
        self.conn
            .execute(INSERT_TASK, params![title, note, created_at, due, false])?;

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            note: note.map(str::to_string),
            created_at,
            due,
            completed: false,
        })
    }

    /// Delete a task by id, reporting whether a row was actually removed
    pub fn remove(&self, id: i64) -> Result<bool, StoreError> {
        let changed = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(changed > 0)
    }

    /// Mark a task as completed, reporting whether the id was found.
    /// Completing an already-completed task is a no-op success.
    pub fn complete(&self, id: i64) -> Result<bool, StoreError> {
        let changed = self.conn.execute(COMPLETE_TASK, params![id])?;
        Ok(changed > 0)
    }

    /// List tasks matching the filter: incomplete before completed, dated
    /// before undated, then by due date ascending
    pub fn list(&self, filter: CompletionFilter) -> Result<Vec<Task>, StoreError> {
        let query = match filter {
            CompletionFilter::All => format!("{} {}", SELECT_TASKS, ORDER_TASKS),
            CompletionFilter::OnlyCompleted => {
                format!("{} WHERE completed = 1 {}", SELECT_TASKS, ORDER_TASKS)
            }
            CompletionFilter::OnlyIncomplete => {
                format!("{} WHERE completed = 0 {}", SELECT_TASKS, ORDER_TASKS)
            }
        };

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([], row_to_task)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }

        Ok(tasks)
    }

    /// Find tasks whose title or note matches a case-insensitive regex.
    /// The pattern is matched against title and note joined by a line break.
    pub fn search(&self, pattern: &str) -> Result<Vec<Task>, StoreError> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;

        let tasks = self.list(CompletionFilter::All)?;
        Ok(tasks
            .into_iter()
            .filter(|task| {
                let haystack =
                    format!("{}\n{}", task.title, task.note.as_deref().unwrap_or_default());
                regex.is_match(&haystack)
            })
            .collect())
    }

    /// Write all tasks to a CSV file with a `title,note,due,completed`
    /// header row, returning the number of rows written
    pub fn export_csv(&self, path: &Path) -> Result<usize, StoreError> {
        let query = format!("{} ORDER BY id", SELECT_TASKS);
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([], row_to_task)?;

        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(["title", "note", "due", "completed"])?;

        let mut count = 0;
        for row in rows {
            let task = row?;
            writer.serialize(ExportRow::from(&task))?;
            count += 1;
        }
        writer.flush()?;

        Ok(count)
    }

    /// Import tasks from a CSV file with a header naming at least a `title`
    /// column, returning the number of rows accepted.
    ///
    /// Rows are processed independently: a row with a missing title, an
    /// unparsable due date, or a shape the reader cannot decode is skipped
    /// with a warning and does not affect the others. Imported tasks get
    /// `created_at` set to the current date, and are completed only when the
    /// `completed` column is exactly `1`.
    pub fn import_csv(&self, path: &Path) -> Result<usize, StoreError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let created_at = Utc::now().date_naive();

        let mut count = 0;
        for (index, result) in reader.deserialize::<ImportRow>().enumerate() {
            let line = index + 2; // line 1 is the header
            let row = match result {
                Ok(row) => row,
                Err(err) => {
                    log::warn!("Skipping malformed row at line {}: {}", line, err);
                    continue;
                }
            };

            if !row.has_title() {
                log::warn!("Skipping row at line {}: missing title", line);
                continue;
            }

            let due = match row.parsed_due() {
                Ok(due) => due,
                Err(err) => {
                    log::warn!("Skipping row at line {}: invalid due date: {}", line, err);
                    continue;
                }
            };

            self.conn.execute(
                INSERT_TASK,
                params![row.title, row.note, created_at, due, row.is_completed()],
            )?;
            count += 1;
        }

        Ok(count)
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        note: row.get(2)?,
        created_at: row.get(3)?,
        due: row.get(4)?,
        completed: row.get(5)?,
    })
}
