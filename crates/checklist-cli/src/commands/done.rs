use anyhow::{Context, Result};

use super::{open_workspace, parse_id, task_json};

pub async fn run(id: String, json: bool) -> Result<()> {
    let ws = open_workspace()?;
    let mut store = ws.open_store().await;
    let id = parse_id(&id)?;

    let done = store.toggle_done(id)?;
    store.flush().await.context("failed to save tasks")?;

    if json {
        if let Some(record) = store.get(id) {
            println!("{}", serde_json::to_string_pretty(&task_json(id, record))?);
        }
    } else if done {
        println!("Checked {}", id);
    } else {
        println!("Unchecked {}", id);
    }
    Ok(())
}
