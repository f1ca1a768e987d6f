//! tasklite CLI - personal task tracking backed by SQLite

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tasklite::cli::display::{display_search_results, display_task_list, error, success};
use tasklite::cli::{Cli, Commands};
use tasklite::models::CompletionFilter;
use tasklite::storage::TaskStore;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => {
            TaskStore::create(&cli.db)?;
            success(&format!("Initialized task database at {}", cli.db.display()));
        }

        Commands::Add { title, note, due } => {
            let store = TaskStore::open(&cli.db)?;
            let task = store.add(&title, note.as_deref(), due)?;
            success(&format!("Added task #{}: {}", task.id, task.title));
        }

        Commands::Remove { id } => {
            let store = TaskStore::open(&cli.db)?;
            if store.remove(id)? {
                success(&format!("Removed task #{}", id));
            } else {
                success(&format!("No task id {}", id));
            }
        }

        Commands::Complete { id } => {
            let store = TaskStore::open(&cli.db)?;
            if store.complete(id)? {
                success(&format!("Completed task #{}", id));
            } else {
                success(&format!("No task id {}", id));
            }
        }

        Commands::List { completed } => {
            let store = TaskStore::open(&cli.db)?;
            let tasks = store.list(completed.unwrap_or(CompletionFilter::All))?;
            display_task_list(&tasks);
        }

        Commands::Search { pattern } => {
            let store = TaskStore::open(&cli.db)?;
            let tasks = store.search(&pattern)?;
            display_search_results(&tasks);
        }

        Commands::ExportCsv { out } => {
            let store = TaskStore::open(&cli.db)?;
            let count = store.export_csv(&out)?;
            success(&format!("Exported {} tasks", count));
        }

        Commands::ImportCsv { infile } => {
            let store = TaskStore::open(&cli.db)?;
            let count = store.import_csv(&infile)?;
            success(&format!("Imported {} tasks", count));
        }
    }

    Ok(())
}
