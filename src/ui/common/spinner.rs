use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Spinning loader glyph.
#[component]
pub fn Spinner(
    /// Additional CSS classes
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class="spinner" role="status" aria-live="polite">
            <Icon name=icons::LOADER class=class />
        </span>
    }
}

/// Submit button that swaps its label for a spinner while the tracked
/// operation is in flight, refusing further submits meanwhile.
#[component]
pub fn LoadingButton(
    /// Idle label
    label: &'static str,
    /// Label shown next to the spinner while loading
    loading_label: &'static str,
    /// Loading signal driving the busy state
    loading: Signal<bool>,
    /// Additional CSS classes for the button
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!("btn-submit {class}")
            disabled=move || loading.get()
        >
            {move || {
                if loading.get() {
                    view! {
                        <span class="btn-submit-busy">
                            <Spinner class="icon icon-spin" />
                            {loading_label}
                        </span>
                    }
                        .into_any()
                } else {
                    view! { <span>{label}</span> }.into_any()
                }
            }}
        </button>
    }
}
