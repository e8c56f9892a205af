use serde::{Deserialize, Serialize};

pub const DEFAULT_TASKS_KEY: &str = "@toDos";
pub const DEFAULT_SELECTION_KEY: &str = "@working";

/// Keys under which the store persists its two values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub tasks_key: String,
    pub selection_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.into(),
            selection_key: DEFAULT_SELECTION_KEY.into(),
        }
    }
}
