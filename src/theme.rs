//! Theme DOM helpers

use todo_core::{Theme, ThemeStore};

use crate::storage::LocalStore;

const DARK_MODE_CLASS: &str = "dark-mode";

/// Saved preference, or the system color scheme when nothing is saved
pub fn initial_theme() -> Theme {
    Theme::resolve(ThemeStore::new(LocalStore).load(), prefers_dark())
}

pub fn save_theme(theme: Theme) {
    ThemeStore::new(LocalStore).save(theme);
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggle the dark-mode class on <body>
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme == Theme::Dark)
    {
        log::warn!("Failed to apply theme {}: {:?}", theme.as_str(), e);
    }
}
