//! Task List Component
//!
//! Rows for the tasks visible under the active filter. Rows are keyed by
//! task id plus occurrence, so tasks sharing a legacy id each get a row.

use leptos::prelude::*;
use todo_core::{visible_rows, TaskId};

use crate::components::TaskRow;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let visible_tasks = Memo::new(move |_| {
        let filter = store.filter().get();
        store.tasks().with(|tasks| {
            visible_rows(tasks, filter)
                .into_iter()
                .map(|(key, task)| (key, task.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_toggle = Callback::new(move |(id, completed): (TaskId, bool)| {
        ctx.toggle_completion(id, completed)
    });
    let on_delete = Callback::new(move |id: TaskId| ctx.delete_task(id));

    view! {
        <ul id="task-list" class="task-list">
            <For
                each=move || visible_tasks.get()
                key=|(key, _)| *key
                children=move |(key, task)| {
                    // the flag is read live so toggles don't remount the row
                    let completed = Signal::derive(move || {
                        store.tasks().with(|tasks| key.find(tasks).is_some_and(|t| t.completed))
                    });
                    view! {
                        <TaskRow
                            task=task
                            completed=completed
                            on_toggle=on_toggle
                            on_delete=on_delete
                        />
                    }
                }
            />
        </ul>
        <Show when=move || visible_tasks.with(|tasks| tasks.is_empty())>
            <p class="empty-list">"Nothing here"</p>
        </Show>
    }
}
