//! String encodings for the two persisted values.
//!
//! The task collection is a JSON object; the selection flag is the bare
//! JSON literal `true` (Work) or `false` (Travel).

use crate::collection::TaskCollection;
use crate::error::CoreError;
use crate::task::Category;

pub fn encode_tasks(tasks: &TaskCollection) -> Result<String, CoreError> {
    Ok(serde_json::to_string(tasks)?)
}

pub fn decode_tasks(data: &str) -> Result<TaskCollection, CoreError> {
    Ok(serde_json::from_str(data)?)
}

pub fn encode_flag(category: Category) -> String {
    category.as_flag().to_string()
}

pub fn decode_flag(data: &str) -> Result<Category, CoreError> {
    let working: bool = serde_json::from_str(data.trim())?;
    Ok(Category::from_flag(working))
}
