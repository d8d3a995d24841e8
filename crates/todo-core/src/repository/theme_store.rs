//! Theme preference persistence, independent of the task list key.

use crate::domain::Theme;
use super::traits::KeyValueStore;

/// Key of the theme preference in the durable store
pub const THEME_KEY: &str = "theme";

pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved preference, `None` when absent or unusable
    pub fn load(&self) -> Option<Theme> {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => {
                let theme = Theme::parse(&value);
                if theme.is_none() {
                    log::warn!("Ignoring unknown theme '{}'", value);
                }
                theme
            }
            Ok(None) => None,
            Err(e) => {
                log::error!("Failed to load theme: {}", e);
                None
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            log::error!("Failed to save theme: {}", e);
        }
    }
}
