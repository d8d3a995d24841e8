//! Task Row Component
//!
//! A single task: checkbox, text and delete button, with fade in/out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use todo_core::{Task, TaskId};

use crate::config::FADE_IN_DELAY_MS;

/// A single task row
///
/// # Arguments
/// * `task` - The task rendered by this row; only `id` and `text` are read
/// * `completed` - Live completion flag for the task
/// * `on_toggle` - Called with (id, checked) when the checkbox changes
/// * `on_delete` - Called with the id when the delete button is pressed
#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] completed: Signal<bool>,
    #[prop(into)] on_toggle: Callback<(TaskId, bool)>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let id = task.id;
    let (entered, set_entered) = signal(false);
    let (leaving, set_leaving) = signal(false);

    spawn_local(async move {
        TimeoutFuture::new(FADE_IN_DELAY_MS).await;
        // row may already be gone
        let _ = set_entered.try_set(true);
    });

    let row_class = move || {
        let mut c = String::from("task-row");
        if completed.get() { c.push_str(" completed"); }
        if entered.get() { c.push_str(" entered"); }
        if leaving.get() { c.push_str(" leaving"); }
        c
    };

    view! {
        <li class=row_class data-task-id=id.to_string()>
            <div class="task-content">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=move || completed.get()
                    on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
                />
                <span>{task.text}</span>
            </div>
            <button
                class="delete-btn"
                disabled=move || leaving.get()
                on:click=move |_| {
                    set_leaving.set(true);
                    on_delete.run(id);
                }
            >
                "Delete"
            </button>
        </li>
    }
}
