//! Task Repository
//!
//! Every operation re-reads the store, applies one mutation and writes the whole
//! collection back. No tasks are cached between calls, so edits made to the
//! store from elsewhere are picked up on the next operation.

use crate::domain::{position_of, DomainResult, Task, TaskId};
use super::id_alloc::IdAllocator;
use super::migration::duplicate_ids;
use super::store::TaskStore;
use super::traits::KeyValueStore;

pub struct TaskRepository<S> {
    store: TaskStore<S>,
    ids: IdAllocator,
}

impl<S: KeyValueStore> TaskRepository<S> {
    /// Open the task list under the default key
    pub fn open(store: S) -> Self {
        Self::from_task_store(TaskStore::new(store))
    }

    /// Scan the persisted tasks once to seed the id allocator
    pub fn from_task_store(store: TaskStore<S>) -> Self {
        let tasks = store.load_tasks();
        let duplicates = duplicate_ids(&tasks);
        if !duplicates.is_empty() {
            log::warn!("Stored tasks share ids {:?}; lookups act on the first match", duplicates);
        }
        let ids = IdAllocator::from_tasks(&tasks);
        log::debug!("Opened task list '{}': {} tasks, last id {}", store.key(), tasks.len(), ids.current());
        Self { store, ids }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Current tasks in insertion order
    pub fn list(&self) -> Vec<Task> {
        self.store.load_tasks()
    }

    /// Append a new pending task.
    ///
    /// Blank text is rejected before the store is touched. When the id space
    /// is used up nothing is written.
    pub fn add_task(&mut self, text: &str) -> DomainResult<Task> {
        let text = Task::validate_text(text)?;
        let mut tasks = self.list();
        let task = Task::new(self.ids.next_id()?, text, false);
        tasks.push(task.clone());
        self.store.save(&tasks);
        log::debug!("Added task {}", task.id);
        Ok(task)
    }

    /// Set the completion flag; returns false when no task has `id`
    pub fn toggle_completion(&self, id: TaskId, completed: bool) -> bool {
        let mut tasks = self.list();
        let Some(index) = position_of(&tasks, id) else {
            log::debug!("Toggle skipped: task {} not found", id);
            return false;
        };
        tasks[index].completed = completed;
        self.store.save(&tasks);
        log::debug!("Task {} completed={}", id, completed);
        true
    }

    /// Remove the task; returns false when no task has `id`
    pub fn delete_task(&self, id: TaskId) -> bool {
        let mut tasks = self.list();
        let Some(index) = position_of(&tasks, id) else {
            log::debug!("Delete skipped: task {} not found", id);
            return false;
        };
        tasks.remove(index);
        self.store.save(&tasks);
        log::debug!("Deleted task {}", id);
        true
    }
}
