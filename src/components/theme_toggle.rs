//! Theme Toggle Component

use leptos::prelude::*;

use crate::theme::{apply_theme, initial_theme, save_theme};

/// Light/dark switch; the choice is remembered across reloads
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(initial_theme());

    Effect::new(move |_| apply_theme(theme.get()));

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        save_theme(next);
        set_theme.set(next);
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" title="Toggle theme" on:click=toggle>
            {move || theme.get().toggle_icon()}
        </button>
    }
}
