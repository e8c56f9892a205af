use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::id::TaskId;
use crate::task::{Category, TaskRecord};

/// Every task, keyed by id.
///
/// Iteration is in ascending id order, which is also creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCollection {
    tasks: BTreeMap<TaskId, TaskRecord>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.get(&id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut TaskRecord> {
        self.tasks.get_mut(&id)
    }

    /// Insert a record, returning the one it replaced.
    pub fn insert(&mut self, id: TaskId, record: TaskRecord) -> Option<TaskRecord> {
        self.tasks.insert(id, record)
    }

    pub fn remove(&mut self, id: TaskId) -> Option<TaskRecord> {
        self.tasks.remove(&id)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Largest id present, used to seed id allocation after a load.
    pub fn last_id(&self) -> Option<TaskId> {
        self.tasks.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &TaskRecord)> + Clone {
        self.tasks.iter().map(|(id, record)| (*id, record))
    }

    /// Tasks in `category`, in id order. The iterator is lazy and can be
    /// cloned to walk the same selection again.
    pub fn by_category(&self, category: Category) -> ByCategory<'_> {
        ByCategory {
            inner: self.tasks.iter(),
            category,
        }
    }
}

/// Iterator returned by [`TaskCollection::by_category`].
#[derive(Clone)]
pub struct ByCategory<'a> {
    inner: btree_map::Iter<'a, TaskId, TaskRecord>,
    category: Category,
}

impl<'a> Iterator for ByCategory<'a> {
    type Item = (TaskId, &'a TaskRecord);

    fn next(&mut self) -> Option<Self::Item> {
        for (id, record) in self.inner.by_ref() {
            if record.category == self.category {
                return Some((*id, record));
            }
        }
        None
    }
}

impl FromIterator<(TaskId, TaskRecord)> for TaskCollection {
    fn from_iter<I: IntoIterator<Item = (TaskId, TaskRecord)>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
