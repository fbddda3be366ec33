use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Labelled text input with an optional leading icon and hint line.
#[component]
pub fn TextField(
    /// Field label text
    label: &'static str,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Autocomplete hint for the browser
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Leading icon name
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Helper text rendered under the input
    #[prop(optional)]
    hint: Option<&'static str>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <div class="field-control">
                {icon.map(|name| view! { <Icon name=name class="icon field-adornment" /> })}
                <input
                    type=input_type
                    class="input-base"
                    class:input-with-adornment=icon.is_some()
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
            {hint.map(|text| view! { <p class="field-hint">{text}</p> })}
        </div>
    }
}

/// Password input with a visibility toggle and an optional inline
/// error line (used for the confirm-password mismatch hint).
#[component]
pub fn PasswordField(
    /// Field label text
    label: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Autocomplete hint for the browser
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether the value is shown as plain text
    visible: Signal<bool>,
    /// Callback flipping the visibility toggle
    on_toggle: Callback<()>,
    /// Optional inline error message
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <div class="field-control">
                <Icon name=icons::LOCK class="icon field-adornment" />
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    class="input-base input-with-adornment"
                    class:input-error=move || error.as_ref().and_then(|e| e.get()).is_some()
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="field-toggle"
                    on:click=move |_| on_toggle.run(())
                    aria-label="Toggle password visibility"
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE_OFF /> }
                        } else {
                            view! { <Icon name=icons::EYE /> }
                        }
                    }}
                </button>
            </div>
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| {
                    view! {
                        <p class="field-error">
                            <Icon name=icons::ALERT_CIRCLE class="icon icon-sm" />
                            <span>{err}</span>
                        </p>
                    }
                })
            }}
        </div>
    }
}

/// Checkbox with a label.
#[component]
pub fn CheckboxField(
    /// Label text
    label: &'static str,
    /// Current checked state
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="checkbox-field">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}
