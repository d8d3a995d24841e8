//! Todo List App
//!
//! Main application component: input, statistics, filters and the task list.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TaskRepository;

use crate::components::{FilterBar, NewTaskForm, StatsPanel, TaskList, ThemeToggle};
use crate::context::AppContext;
use crate::storage::LocalStore;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(TaskRepository::open(LocalStore), (reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Re-read the task list whenever an operation asks for it
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let tasks = ctx.list_tasks();
        log::debug!("Loaded {} tasks, trigger={}", tasks.len(), trigger);
        *store.tasks().write() = tasks;
    });

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"Todo List"</h1>
                <ThemeToggle />
            </header>

            <NewTaskForm />

            <StatsPanel />

            <FilterBar />

            <TaskList />
        </div>
    }
}
