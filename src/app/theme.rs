use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::theme::{Theme, DARK_CLASS, THEME_STORAGE_KEY};

/// The active theme plus its only writer.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme: switching to {next}");
        self.set_theme.set(next);
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    // Storage is read after hydration so the server markup (always dark)
    // matches the first client render.
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );

    Effect::new(move |_| apply_root_class(theme.get()));

    provide_context(ThemeContext { theme, set_theme });
    children()
}

fn apply_root_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        log::warn!("theme: no document element to apply {theme} to");
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        log::warn!("theme: couldn't toggle root class: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let is_dark = move || ctx.theme().is_dark();
    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-accent transition-colors"
            aria-label=move || {
                if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            }
            on:click=move |_| ctx.toggle()
        >
            {move || if is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
