use anyhow::Result;
use checklist_core::Category;
use checklist_store::query::{query_tasks, StatusFilter, TaskQuery};

use super::{open_workspace, print_task, task_json};

pub async fn run(
    category: Option<Category>,
    all: bool,
    status: StatusFilter,
    contains: Option<String>,
    json: bool,
) -> Result<()> {
    let ws = open_workspace()?;
    let store = ws.open_store().await;

    let category = if all {
        None
    } else {
        Some(category.unwrap_or(store.category()))
    };
    let query = TaskQuery {
        category,
        status,
        contains,
    };
    let results = query_tasks(store.tasks(), &query);

    if json {
        let entries: Vec<_> = results.iter().map(|(id, r)| task_json(*id, r)).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    match category {
        Some(c) if results.is_empty() => println!("No tasks in '{}'. {}", c, c.prompt()),
        None if results.is_empty() => println!("No tasks"),
        _ => {
            for (id, record) in results {
                if all {
                    print!("{:<7}", record.category.as_str());
                }
                print_task(id, record);
            }
        }
    }
    Ok(())
}
