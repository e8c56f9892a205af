use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::file_gateway::FileGateway;
use crate::store::TaskStore;

const WORKSPACE_DIR: &str = ".checklist";
const CONFIG_FILE: &str = "config.json";
const KV_DIR: &str = "kv";

/// Contents of `.checklist/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub store: StoreConfig,
}

/// A `.checklist/` directory: config plus a file-backed key-value store.
///
/// Layout:
/// - `config.json` — [`WorkspaceConfig`]
/// - `kv/`         — one file per persisted key
pub struct Workspace {
    root: PathBuf,
    config: WorkspaceConfig,
}

impl Workspace {
    /// Create a new workspace at `path`.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        let dir = root.join(WORKSPACE_DIR);

        if dir.exists() {
            return Err(StoreError::WorkspaceExists(dir.display().to_string()));
        }

        fs::create_dir_all(dir.join(KV_DIR))?;

        let config = WorkspaceConfig {
            version: 1,
            created_at: Utc::now(),
            store: StoreConfig::default(),
        };
        fs::write(dir.join(CONFIG_FILE), serde_json::to_string_pretty(&config)?)?;

        Ok(Self { root, config })
    }

    /// Open an existing workspace at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        let dir = root.join(WORKSPACE_DIR);

        if !dir.exists() {
            return Err(StoreError::WorkspaceNotFound(root.display().to_string()));
        }

        let data = fs::read_to_string(dir.join(CONFIG_FILE))?;
        let config = serde_json::from_str(&data)?;
        Ok(Self { root, config })
    }

    /// Search upward from `start` for a `.checklist/` directory and open it.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut current = start.as_ref().to_path_buf();
        loop {
            if current.join(WORKSPACE_DIR).exists() {
                return Self::open(&current);
            }
            if !current.pop() {
                return Err(StoreError::WorkspaceNotFound(
                    start.as_ref().display().to_string(),
                ));
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR)
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn gateway(&self) -> FileGateway {
        FileGateway::new(self.dir().join(KV_DIR))
    }

    /// Build a store over this workspace and restore its saved state.
    ///
    /// Unreadable saved data is logged and leaves the store empty.
    pub async fn open_store(&self) -> TaskStore {
        let mut store = TaskStore::new(Arc::new(self.gateway()), self.config.store.clone());
        if let Err(e) = store.load().await {
            warn!(error = %e, "starting with an empty task list");
        }
        store.load_category().await;
        store
    }
}
