use anyhow::{Context, Result};
use checklist_store::Workspace;
use std::env;

pub fn run() -> Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    let ws = Workspace::init(&cwd).context("failed to initialize workspace")?;
    println!("Initialized empty checklist in {}", ws.dir().display());
    Ok(())
}
