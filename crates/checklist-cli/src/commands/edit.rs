use anyhow::{Context, Result};

use super::{open_workspace, parse_id};

pub async fn run(id: String, text: String) -> Result<()> {
    let ws = open_workspace()?;
    let mut store = ws.open_store().await;
    let id = parse_id(&id)?;

    store.edit_text(id, &text)?;
    store.commit_edits().await.context("failed to save tasks")?;
    println!("Updated {}", id);
    Ok(())
}
