use anyhow::{Context, Result};
use checklist_store::Confirmation;
use std::io::{self, BufRead, Write};

use super::{open_workspace, parse_id};

pub async fn run(id: String, yes: bool) -> Result<()> {
    let ws = open_workspace()?;
    let mut store = ws.open_store().await;
    let id = parse_id(&id)?;

    let pending = store.request_delete(id)?;
    let answer = if yes {
        Confirmation::Confirmed
    } else {
        confirm(&pending.record().text)?
    };

    match store.resolve_delete(pending, answer)? {
        Some(_) => {
            store.flush().await.context("failed to save tasks")?;
            println!("Deleted {}", id);
        }
        None => println!("Kept {}", id),
    }
    Ok(())
}

/// Ask on stdin. Anything but an explicit yes cancels.
fn confirm(text: &str) -> Result<Confirmation> {
    let mut stdout = io::stdout();
    write!(stdout, "Delete To Do? \"{}\"\nAre you sure? [y/N] ", text)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    println!();
    Ok(match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Cancelled,
    })
}
