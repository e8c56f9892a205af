//! Task state management and its persistence.
//!
//! [`TaskStore`] owns the in-memory task collection and the category
//! selection. Mutations apply immediately and hand a full-state write to a
//! background writer; [`TaskStore::flush`] waits for those writes.

pub mod config;
pub mod error;
pub mod file_gateway;
pub mod gateway;
pub mod query;
pub mod store;
pub mod workspace;
mod writer;

pub use config::StoreConfig;
pub use error::{GatewayError, StoreError};
pub use file_gateway::FileGateway;
pub use gateway::{KeyValueStore, MemoryGateway, SharedKeyValueStore};
pub use store::{Confirmation, PendingDelete, TaskStore};
pub use workspace::Workspace;
