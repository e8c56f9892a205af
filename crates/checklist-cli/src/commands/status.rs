use anyhow::Result;
use checklist_store::query::summary;

use super::open_workspace;

pub async fn run(json: bool) -> Result<()> {
    let ws = open_workspace()?;
    let store = ws.open_store().await;
    let counts = summary(store.tasks());

    if json {
        let output = serde_json::json!({
            "category": store.category(),
            "summary": counts,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("On list '{}'", store.category());
    println!("  work:   {} done of {}", counts.work.done, counts.work.total);
    println!("  travel: {} done of {}", counts.travel.done, counts.travel.total);
    Ok(())
}
