use checklist_core::collection::ByCategory;
use checklist_core::serialize::{decode_flag, decode_tasks, encode_flag, encode_tasks};
use checklist_core::{Category, IdAllocator, TaskCollection, TaskId, TaskRecord};
use tracing::{debug, error, warn};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::gateway::SharedKeyValueStore;
use crate::writer::PersistenceWriter;

/// Answer to a delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// First half of a two-step delete: the task the user is being asked about.
#[derive(Debug)]
pub struct PendingDelete {
    id: TaskId,
    record: TaskRecord,
}

impl PendingDelete {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// The task as it was when the prompt was raised.
    pub fn record(&self) -> &TaskRecord {
        &self.record
    }
}

/// Owner of the task collection and the category selection.
///
/// Every mutation updates memory first and then queues a write of the
/// full collection (or of the selection flag). Writes are not awaited;
/// call [`TaskStore::flush`] to wait for them and see failures.
///
/// Must be created inside a Tokio runtime.
pub struct TaskStore {
    tasks: TaskCollection,
    ids: IdAllocator,
    category: Category,
    config: StoreConfig,
    gateway: SharedKeyValueStore,
    writer: PersistenceWriter,
}

impl TaskStore {
    pub fn new(gateway: SharedKeyValueStore, config: StoreConfig) -> Self {
        Self {
            tasks: TaskCollection::new(),
            ids: IdAllocator::new(),
            category: Category::default(),
            config,
            writer: PersistenceWriter::spawn(gateway.clone()),
            gateway,
        }
    }

    pub fn with_gateway(gateway: SharedKeyValueStore) -> Self {
        Self::new(gateway, StoreConfig::default())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // --- Loading ---

    /// Replace the in-memory collection with the persisted one.
    ///
    /// Nothing stored yet is not an error. On a read or decode failure the
    /// collection is left empty and the error is returned.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        self.tasks.clear();
        let key = self.config.tasks_key.clone();

        let raw = match self.gateway.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %key, "no stored tasks, starting empty");
                return Ok(());
            }
            Err(source) => {
                warn!(key = %key, error = %source, "failed to read stored tasks");
                return Err(StoreError::PersistenceRead { key, source });
            }
        };

        match decode_tasks(&raw) {
            Ok(tasks) => {
                if let Some(last) = tasks.last_id() {
                    self.ids.observe(last);
                }
                debug!(count = tasks.len(), "loaded tasks");
                self.tasks = tasks;
                Ok(())
            }
            Err(source) => {
                warn!(key = %key, error = %source, "stored tasks are malformed, starting empty");
                Err(StoreError::Deserialization { key, source })
            }
        }
    }

    /// Restore the persisted category selection, defaulting to Work when it
    /// is absent or unreadable.
    pub async fn load_category(&mut self) -> Category {
        let key = &self.config.selection_key;
        let category = match self.gateway.get(key).await {
            Ok(Some(raw)) => decode_flag(&raw).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "stored selection is malformed, using work");
                Category::Work
            }),
            Ok(None) => Category::Work,
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read stored selection, using work");
                Category::Work
            }
        };
        self.category = category;
        category
    }

    // --- Selection ---

    pub fn category(&self) -> Category {
        self.category
    }

    /// Switch the active list and persist the flag under its own key.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.writer.enqueue(&self.config.selection_key, encode_flag(category));
    }

    // --- Tasks ---

    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn list_by_category(&self, category: Category) -> ByCategory<'_> {
        self.tasks.by_category(category)
    }

    /// Tasks in the currently selected list.
    pub fn visible(&self) -> ByCategory<'_> {
        self.tasks.by_category(self.category)
    }

    /// Create a task. Empty text is ignored and yields `Ok(None)`.
    ///
    /// Fails without touching the collection if no fresh id is left.
    pub fn create(
        &mut self,
        text: &str,
        category: Category,
    ) -> Result<Option<TaskId>, StoreError> {
        if text.is_empty() {
            debug!("ignoring task with empty text");
            return Ok(None);
        }
        let id = self.ids.next_id().inspect_err(|e| {
            error!(error = %e, "cannot allocate a task id");
        })?;
        self.tasks.insert(id, TaskRecord::new(text, category));
        debug!(%id, %category, "created task");
        self.persist_tasks();
        Ok(Some(id))
    }

    /// Create a task in the currently selected list.
    pub fn add(&mut self, text: &str) -> Result<Option<TaskId>, StoreError> {
        self.create(text, self.category)
    }

    /// Flip a task's done flag and return the new value.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let record = self.record_mut(id)?;
        record.done = !record.done;
        let done = record.done;
        debug!(%id, done, "toggled task");
        self.persist_tasks();
        Ok(done)
    }

    /// Replace a task's text in memory only; see [`TaskStore::commit_edits`].
    pub fn edit_text(&mut self, id: TaskId, text: &str) -> Result<(), StoreError> {
        let record = self.record_mut(id)?;
        record.text = text.to_string();
        Ok(())
    }

    /// Persist pending text edits and wait for the write.
    ///
    /// A successful full write clears failures of earlier collection writes.
    pub async fn commit_edits(&self) -> Result<(), StoreError> {
        self.persist_tasks();
        self.writer.flush().await
    }

    /// Start a delete. Nothing changes until [`TaskStore::resolve_delete`].
    pub fn request_delete(&self, id: TaskId) -> Result<PendingDelete, StoreError> {
        let record = self.tasks.get(id).cloned().ok_or_else(|| {
            error!(%id, "delete requested for unknown task");
            StoreError::UnknownTask(id)
        })?;
        Ok(PendingDelete { id, record })
    }

    /// Finish a delete. Only a confirmed answer removes the task; the
    /// removed record is returned.
    pub fn resolve_delete(
        &mut self,
        pending: PendingDelete,
        answer: Confirmation,
    ) -> Result<Option<TaskRecord>, StoreError> {
        if answer == Confirmation::Cancelled {
            debug!(id = %pending.id, "delete cancelled");
            return Ok(None);
        }
        let removed = self.tasks.remove(pending.id).ok_or_else(|| {
            error!(id = %pending.id, "confirmed delete of unknown task");
            StoreError::UnknownTask(pending.id)
        })?;
        debug!(id = %pending.id, "deleted task");
        self.persist_tasks();
        Ok(Some(removed))
    }

    /// Wait for every queued write. Reports a key whose most recent write
    /// failed, if any.
    pub async fn flush(&self) -> Result<(), StoreError> {
        self.writer.flush().await
    }

    fn record_mut(&mut self, id: TaskId) -> Result<&mut TaskRecord, StoreError> {
        self.tasks.get_mut(id).ok_or_else(|| {
            error!(%id, "operation on unknown task");
            StoreError::UnknownTask(id)
        })
    }

    fn persist_tasks(&self) {
        match encode_tasks(&self.tasks) {
            Ok(data) => self.writer.enqueue(&self.config.tasks_key, data),
            Err(e) => warn!(error = %e, "failed to encode tasks, write skipped"),
        }
    }
}
