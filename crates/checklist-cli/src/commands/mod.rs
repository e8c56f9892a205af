pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod status;
pub mod switch;

use anyhow::{Context, Result};
use checklist_core::{TaskId, TaskRecord};
use checklist_store::Workspace;
use std::env;
use tracing::debug;

/// `CHECKLIST_DIR` wins over searching upward from the working directory.
pub fn open_workspace() -> Result<Workspace> {
    let ws = match env::var("CHECKLIST_DIR") {
        Ok(dir) => Workspace::open(&dir).context(format!("no checklist workspace in {}", dir))?,
        Err(_) => {
            let cwd = env::current_dir()?;
            Workspace::discover(&cwd)
                .context("not a checklist workspace (or any parent); run `init` first")?
        }
    };
    debug!(root = %ws.root().display(), "using workspace");
    Ok(ws)
}

pub fn parse_id(id: &str) -> Result<TaskId> {
    TaskId::parse(id).context(format!("'{}' is not a task id", id))
}

pub fn task_json(id: TaskId, record: &TaskRecord) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "text": record.text,
        "category": record.category,
        "done": record.done,
    })
}

pub fn print_task(id: TaskId, record: &TaskRecord) {
    let mark = if record.done { "x" } else { " " };
    println!("[{}] {}  {}", mark, id, record.text);
}
