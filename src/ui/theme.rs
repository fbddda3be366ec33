//! Theme context for switching between the dark and light palette.
//!
//! The effective theme is applied as a `dark` class on `<html>` and
//! persisted to localStorage. The app defaults to dark, matching the
//! platform's visual identity.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
const STORAGE_KEY_THEME: &str = "maxwave-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Flip between dark and light, persist, and restyle the document.
    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        self.mode.set(next);
        persist_theme(next);
        self.apply_theme_class();
    }

    /// Apply or remove the `dark` class on the document element.
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if self.mode.get_untracked() == ThemeMode::Dark {
                            let _ = class_list.add_1("dark");
                        } else {
                            let _ = class_list.remove_1("dark");
                        }
                    }
                }
            }
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn persist_theme(mode: ThemeMode) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY_THEME, mode.as_str());
        }
    }
}

#[cfg(feature = "ssr")]
fn persist_theme(_mode: ThemeMode) {}

/// Load theme from localStorage
fn load_persisted_theme() -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(STORAGE_KEY_THEME) {
                    return ThemeMode::from_str(&value);
                }
            }
        }
    }
    ThemeMode::default()
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(load_persisted_theme());
    let ctx = ThemeContext { mode };

    // Restyle whenever the mode changes (and once after hydration).
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let _ = ctx.mode.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Sun/moon toggle button shown in page headers.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.mode.get() == ThemeMode::Dark {
                    view! { <Icon name=icons::SUN /> }
                } else {
                    view! { <Icon name=icons::MOON /> }
                }
            }}
        </button>
    }
}
