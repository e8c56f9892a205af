use chrono::Utc;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A task identifier: milliseconds since the Unix epoch at creation time,
/// bumped forward when two tasks are created within the same millisecond.
///
/// Serialized as a decimal string so it can key a JSON object.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse a decimal id as typed on the command line or stored as a key.
    ///
    /// Only the canonical form is accepted (no whitespace, no leading
    /// zeros), so two distinct keys can never name the same task.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(CoreError::InvalidTaskId(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidTaskId(s.to_string()))
    }
}

impl FromStr for TaskId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskId({})", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct TaskIdVisitor;

impl<'de> Visitor<'de> for TaskIdVisitor {
    type Value = TaskId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal task id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TaskId, E> {
        TaskId::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TaskId, E> {
        Ok(TaskId(v))
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TaskIdVisitor)
    }
}

/// Hands out strictly increasing, time-derived task ids.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids sort after `id`. Called for every loaded task.
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id.0);
    }

    pub fn next_id(&mut self) -> Result<TaskId, CoreError> {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> Result<TaskId, CoreError> {
        let now = u64::try_from(now_ms).unwrap_or(0);
        let after_last = self.last.checked_add(1).ok_or(CoreError::IdsExhausted)?;
        let id = now.max(after_last);
        self.last = id;
        Ok(TaskId(id))
    }
}
