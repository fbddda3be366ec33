//! Banners for collaborator-reported errors and static info panels.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Dismissible error banner. Shows while the signal carries a message;
/// the dismiss button hands control back to the caller.
#[component]
pub fn ErrorBanner(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Callback when the user dismisses the banner
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon icon-sm" />
                <span class="error-banner-text">{move || error.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="error-banner-dismiss"
                    on:click=move |_| on_dismiss.run(())
                    aria-label="Dismiss"
                >
                    <Icon name=icons::X class="icon icon-sm" />
                </button>
            </div>
        </Show>
    }
}

/// Static informational panel with a title and arbitrary body content.
#[component]
pub fn InfoPanel(
    /// Panel heading
    title: &'static str,
    /// Panel body
    children: Children,
) -> impl IntoView {
    view! {
        <div class="info-panel">
            <p class="info-panel-title">
                <Icon name=icons::INFO_CIRCLE class="icon icon-sm" />
                <span>{title}</span>
            </p>
            <div class="info-panel-body">{children()}</div>
        </div>
    }
}
