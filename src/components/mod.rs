//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod filter_bar;
mod stats_panel;
mod task_list;
mod task_row;
mod theme_toggle;

pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use stats_panel::StatsPanel;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use theme_toggle::ThemeToggle;
