//! Display formatting for CLI output

use crate::models::Task;

/// Render one task as a list line: `[id] [✓] title (due:YYYY-MM-DD)`
fn task_line(task: &Task) -> String {
    let marker = if task.completed { "✓" } else { " " };
    let due = task
        .due
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("[{}] [{}] {} (due:{})", task.id, marker, task.title, due)
}

/// Display the `list` output: one line per task, note indented below
pub fn display_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks");
        return;
    }

    for task in tasks {
        println!("{}", task_line(task));
        if let Some(note) = task.note.as_deref()
            && !note.is_empty()
        {
            println!("   {}", note);
        }
    }
}

/// Display `search` matches: id, marker and title only
pub fn display_search_results(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No matches");
        return;
    }

    for task in tasks {
        let marker = if task.completed { "✓" } else { " " };
        println!("[{}] [{}] {}", task.id, marker, task.title);
    }
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: i64, title: &str, due: Option<&str>, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            note: None,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            due: due.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            completed,
        }
    }

    #[test]
    fn test_task_line_with_due() {
        let line = task_line(&task(3, "Buy milk", Some("2026-09-01"), false));
        assert_eq!(line, "[3] [ ] Buy milk (due:2026-09-01)");
    }

    #[test]
    fn test_task_line_completed_without_due() {
        let line = task_line(&task(12, "Laundry", None, true));
        assert_eq!(line, "[12] [✓] Laundry (due:-)");
    }
}
