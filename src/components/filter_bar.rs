//! Filter Bar Component
//!
//! All / Completed / Pending buttons.

use leptos::prelude::*;
use todo_core::Filter;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filters">
            {Filter::ALL.into_iter().map(|(filter, label)| {
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| *store.filter().write() = filter
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
