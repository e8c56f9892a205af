use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which of the two lists a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    /// The stored boolean form: `true` is Work.
    pub fn as_flag(self) -> bool {
        matches!(self, Self::Work)
    }

    pub fn from_flag(working: bool) -> Self {
        if working {
            Self::Work
        } else {
            Self::Travel
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Travel => "travel",
        }
    }

    /// Placeholder shown in the new-entry input for this list.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Work => "Add a To Do",
            Self::Travel => "Where do you wanna go?",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "travel" => Ok(Self::Travel),
            other => Err(CoreError::InvalidCategory(other.to_string())),
        }
    }
}

/// A single entry in one of the lists.
///
/// Field names on disk are `text`, `working` and `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub text: String,
    #[serde(rename = "working", with = "working_flag")]
    pub category: Category,
    #[serde(rename = "check", default)]
    pub done: bool,
}

impl TaskRecord {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            done: false,
        }
    }
}

mod working_flag {
    use super::Category;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(category: &Category, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bool(category.as_flag())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Category, D::Error> {
        bool::deserialize(d).map(Category::from_flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_stored_field_names() {
        let record = TaskRecord::new("Buy milk", Category::Work);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "Buy milk", "working": true, "check": false})
        );
    }

    #[test]
    fn record_reads_travel_flag() {
        let record: TaskRecord =
            serde_json::from_str(r#"{"text":"Paris","working":false,"check":true}"#).unwrap();
        assert_eq!(record.category, Category::Travel);
        assert!(record.done);
    }

    #[test]
    fn missing_check_defaults_to_not_done() {
        let record: TaskRecord = serde_json::from_str(r#"{"text":"x","working":true}"#).unwrap();
        assert!(!record.done);
    }

    #[test]
    fn category_parse() {
        assert_eq!("Travel".parse::<Category>().unwrap(), Category::Travel);
        assert_eq!(" work ".parse::<Category>().unwrap(), Category::Work);
        assert!("home".parse::<Category>().is_err());
    }

    #[test]
    fn flag_mapping() {
        assert!(Category::Work.as_flag());
        assert_eq!(Category::from_flag(false), Category::Travel);
    }
}
