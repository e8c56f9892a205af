use anyhow::{Context, Result};
use checklist_core::Category;

use super::open_workspace;

pub async fn run(category: Category) -> Result<()> {
    let ws = open_workspace()?;
    let mut store = ws.open_store().await;

    store.set_category(category);
    store.flush().await.context("failed to save selection")?;
    println!("Switched to '{}'", category);
    Ok(())
}
