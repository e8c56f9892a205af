//! Key-value persistence gateway
//!
//! The task store only ever reads and writes whole string values under a
//! handful of fixed keys.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::GatewayError;

/// Async string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`; `Ok(None)` when nothing was ever stored.
    async fn get(&self, key: &str) -> Result<Option<String>, GatewayError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), GatewayError>;
}

/// Shared gateway reference
pub type SharedKeyValueStore = Arc<dyn KeyValueStore>;

/// In-memory gateway
#[derive(Debug, Default)]
pub struct MemoryGateway {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as if a previous run had written it.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(entries) = self.entries.get_mut() {
            entries.insert(key.into(), value.into());
        }
        self
    }

    /// Synchronous peek used by tests and diagnostics.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemoryGateway {
    async fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
