pub mod collection;
pub mod error;
pub mod id;
pub mod serialize;
pub mod task;

pub use collection::TaskCollection;
pub use id::{IdAllocator, TaskId};
pub use task::{Category, TaskRecord};
