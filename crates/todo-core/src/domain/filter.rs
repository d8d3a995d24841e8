//! View Filters
//!
//! Selects which tasks are shown without touching the underlying collection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::task::{Task, TaskId};

/// Active list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task
    #[default]
    All,
    /// Tasks marked done
    Completed,
    /// Tasks not yet done
    Pending,
}

impl Filter {
    /// Filters in display order, with their button labels
    pub const ALL: [(Filter, &'static str); 3] = [
        (Filter::All, "All"),
        (Filter::Completed, "Completed"),
        (Filter::Pending, "Pending"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        }
    }

    /// `None` for unknown names; callers fall back to `Filter::default()`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Filter::All),
            "completed" => Some(Filter::Completed),
            "pending" => Some(Filter::Pending),
            _ => None,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }
}

/// Tasks visible under `filter`, in insertion order
pub fn visible(tasks: &[Task], filter: Filter) -> impl Iterator<Item = &Task> + '_ {
    tasks.iter().filter(move |task| filter.matches(task))
}

/// Render key of a task row.
///
/// Legacy data can hold several tasks with one id, so the key also counts the
/// earlier tasks sharing that id. Counting runs over the full list, so a row
/// keeps its key when the filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub id: TaskId,
    pub occurrence: usize,
}

impl RowKey {
    /// The task this row renders
    pub fn find<'a>(&self, tasks: &'a [Task]) -> Option<&'a Task> {
        tasks.iter().filter(|t| t.id == self.id).nth(self.occurrence)
    }
}

/// Visible tasks paired with unique row keys, in insertion order
pub fn visible_rows(tasks: &[Task], filter: Filter) -> Vec<(RowKey, &Task)> {
    let mut seen: HashMap<TaskId, usize> = HashMap::new();
    tasks
        .iter()
        .filter_map(|task| {
            let count = seen.entry(task.id).or_insert(0);
            let key = RowKey { id: task.id, occurrence: *count };
            *count += 1;
            filter.matches(task).then_some((key, task))
        })
        .collect()
}
