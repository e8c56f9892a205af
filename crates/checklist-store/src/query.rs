//! Filters over the task collection for listing and reporting.

use checklist_core::{Category, TaskCollection, TaskId, TaskRecord};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl StatusFilter {
    fn matches(self, record: &TaskRecord) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !record.done,
            Self::Done => record.done,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            other => Err(format!("unknown status '{other}' (expected all, pending or done)")),
        }
    }
}

/// Optional filters; an empty query matches every task.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub category: Option<Category>,
    pub status: StatusFilter,
    /// Case-insensitive substring of the task text.
    pub contains: Option<String>,
}

/// Tasks matching `query`, in id order.
pub fn query_tasks<'a>(
    tasks: &'a TaskCollection,
    query: &TaskQuery,
) -> Vec<(TaskId, &'a TaskRecord)> {
    let needle = query.contains.as_ref().map(|s| s.to_lowercase());
    tasks
        .iter()
        .filter(|(_, record)| query.category.map_or(true, |c| record.category == c))
        .filter(|(_, record)| query.status.matches(record))
        .filter(|(_, record)| {
            needle
                .as_ref()
                .map_or(true, |n| record.text.to_lowercase().contains(n.as_str()))
        })
        .collect()
}

/// Per-list counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub done: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub work: CategoryCounts,
    pub travel: CategoryCounts,
}

pub fn summary(tasks: &TaskCollection) -> Summary {
    let mut summary = Summary::default();
    for (_, record) in tasks.iter() {
        let counts = match record.category {
            Category::Work => &mut summary.work,
            Category::Travel => &mut summary.travel,
        };
        counts.total += 1;
        if record.done {
            counts.done += 1;
        }
    }
    summary
}
