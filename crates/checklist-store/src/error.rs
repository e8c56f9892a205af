use checklist_core::TaskId;
use thiserror::Error;

/// Failures reported by a [`crate::KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key '{0}'")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] checklist_core::error::CoreError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read '{key}': {source}")]
    PersistenceRead {
        key: String,
        #[source]
        source: GatewayError,
    },

    #[error("failed to write '{key}': {message}")]
    PersistenceWrite { key: String, message: String },

    #[error("stored value under '{key}' is malformed: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: checklist_core::error::CoreError,
    },

    #[error("no task with id {0}")]
    UnknownTask(TaskId),

    #[error("persistence writer has stopped")]
    WriterClosed,

    #[error("workspace not found (searched upward from {0})")]
    WorkspaceNotFound(String),

    #[error("workspace already exists at {0}")]
    WorkspaceExists(String),
}
