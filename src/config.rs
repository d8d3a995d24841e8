//! Frontend Settings
//!
//! Compile-time knobs; storage keys live in `todo_core`.

use log::LevelFilter;

/// Delay before a freshly mounted row fades in
pub const FADE_IN_DELAY_MS: u32 = 10;

/// Length of the row slide-out before the list is redrawn
pub const DELETE_ANIMATION_MS: u32 = 300;

pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
