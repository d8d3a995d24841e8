//! Application Context
//!
//! Shared state provided via Leptos Context API. Components go through here
//! for every task operation; none of them touch storage directly.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use todo_core::{DomainError, Task, TaskId, TaskRepository};

use crate::config::DELETE_ANIMATION_MS;
use crate::storage::LocalStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task repository (owns the id allocator)
    repo: StoredValue<TaskRepository<LocalStore>>,
    /// Trigger to reload tasks from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from storage - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        repo: TaskRepository<LocalStore>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            repo: StoredValue::new(repo),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn list_tasks(&self) -> Vec<Task> {
        self.repo.with_value(|repo| repo.list())
    }

    /// Add a task from raw input; returns false when nothing was added
    pub fn add_task(&self, text: &str) -> bool {
        match self.repo.try_update_value(|repo| repo.add_task(text)) {
            Some(Ok(_)) => {
                self.reload();
                true
            }
            Some(Err(DomainError::Validation(reason))) => {
                log::debug!("New task ignored: {}", reason);
                false
            }
            Some(Err(e)) => {
                log::error!("Failed to add task: {}", e);
                false
            }
            None => false,
        }
    }

    /// A miss still reloads, so a row for a task deleted elsewhere goes away
    pub fn toggle_completion(&self, id: TaskId, completed: bool) {
        self.repo.with_value(|repo| repo.toggle_completion(id, completed));
        self.reload();
    }

    /// Remove the task from storage now, redraw once the row has slid out
    pub fn delete_task(&self, id: TaskId) {
        self.repo.with_value(|repo| repo.delete_task(id));
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(DELETE_ANIMATION_MS).await;
            ctx.reload();
        });
    }
}
