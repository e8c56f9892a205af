use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("task ids exhausted")]
    IdsExhausted,

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
