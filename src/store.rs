//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Filter, Task};

/// View state: the last loaded task list and the active filter
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full task list, refreshed from storage on every reload
    pub tasks: Vec<Task>,
    /// Active list filter
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
