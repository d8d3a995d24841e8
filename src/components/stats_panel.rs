//! Stats Panel Component
//!
//! Totals and progress bar. Always counts the full list, whatever the filter.

use leptos::prelude::*;
use todo_core::TaskStats;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.tasks().with(|tasks| TaskStats::compute(tasks)));
    let percent = move || format!("{}%", stats.get().progress_percent);

    view! {
        <div class="stats">
            <div class="stat">
                <span id="total-tasks" class="stat-value">{move || stats.get().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat">
                <span id="completed-tasks" class="stat-value">{move || stats.get().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
            <div class="stat">
                <span id="pending-tasks" class="stat-value">{move || stats.get().pending}</span>
                <span class="stat-label">"Pending"</span>
            </div>
            <div class="progress">
                <div class="progress-bar">
                    <div id="progress-fill" class="progress-fill" style:width=percent></div>
                </div>
                <span id="progress-text" class="progress-text">{percent}</span>
            </div>
        </div>
    }
}
