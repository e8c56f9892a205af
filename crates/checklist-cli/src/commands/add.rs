use anyhow::{Context, Result};
use checklist_core::Category;

use super::{open_workspace, task_json};

pub async fn run(text: String, category: Option<Category>, json: bool) -> Result<()> {
    let ws = open_workspace()?;
    let mut store = ws.open_store().await;

    let category = category.unwrap_or(store.category());
    let Some(id) = store.create(&text, category)? else {
        // Empty entries are dropped without complaint.
        return Ok(());
    };
    store.flush().await.context("failed to save tasks")?;

    if json {
        if let Some(record) = store.get(id) {
            println!("{}", serde_json::to_string_pretty(&task_json(id, record))?);
        }
    } else {
        println!("[{}] {}", category, id);
    }
    Ok(())
}
