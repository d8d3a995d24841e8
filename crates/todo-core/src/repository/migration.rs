//! Legacy Migration
//!
//! Older versions stored tasks as bare strings, and some records were written
//! without an id. Everything is upgraded to canonical `Task` records here;
//! nothing past this boundary sees the legacy shapes. Upgrading never writes
//! back: the stored document only changes on the next save.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{DomainError, DomainResult, Task, TaskId};

/// One stored entry, as found in the durable store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEntry {
    /// Bare task text: pending, no id
    Legacy(String),
    /// Structured record, possibly missing its id
    Record(RawRecord),
}

/// A stored object entry. Damaged fields degrade to their defaults
/// instead of rejecting the entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<TaskId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub completed: bool,
}

/// Anything but a non-negative integer that fits a `TaskId` counts as missing
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<TaskId>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| TaskId::try_from(n).ok()))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Only a literal `true` marks a task done; null and other values read as false
fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Parse a stored document.
///
/// The document itself must be a JSON array. Entries are read one at a
/// time: an entry that is neither a string nor an object is skipped with a
/// warning, the rest of the list survives.
pub fn parse_document(raw: &str) -> DomainResult<Vec<RawEntry>> {
    let values: Vec<Value> = serde_json::from_str(raw)
        .map_err(|e| DomainError::StoreRead(format!("malformed task list: {}", e)))?;
    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let entry = RawEntry::from_value(value);
            if entry.is_none() {
                log::warn!("Skipping unreadable task entry at position {}", index);
            }
            entry
        })
        .collect())
}

impl RawEntry {
    /// Read one array element; `None` for values that cannot hold a task
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(RawEntry::Legacy(text)),
            Value::Object(_) => serde_json::from_value(value).ok().map(RawEntry::Record),
            _ => None,
        }
    }

    /// Upgrade to a canonical record; `index` is the entry's stored position
    pub fn into_task(self, index: usize) -> Task {
        match self {
            RawEntry::Legacy(text) => Task::new(fallback_id(index), text, false),
            RawEntry::Record(record) => {
                // id 0 is never allocated, so it counts as missing
                let id = record
                    .id
                    .filter(|id| *id != 0)
                    .unwrap_or_else(|| fallback_id(index));
                Task::new(id, record.text, record.completed)
            }
        }
    }
}

/// Positional id for entries stored without one
fn fallback_id(index: usize) -> TaskId {
    TaskId::try_from(index + 1).unwrap_or(TaskId::MAX)
}

/// Convert stored entries into canonical tasks, keeping order and count
pub fn normalize(entries: Vec<RawEntry>) -> Vec<Task> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_task(index))
        .collect()
}

/// Ids carried by more than one task, in order of first repetition
pub fn duplicate_ids(tasks: &[Task]) -> Vec<TaskId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for task in tasks {
        if !seen.insert(task.id) && !duplicates.contains(&task.id) {
            duplicates.push(task.id);
        }
    }
    duplicates
}
