//! Three-mode authentication form (sign in / register / guest).
//!
//! One [`FormState`] backs all three tab panels; changing tabs
//! replaces it wholesale and clears the collaborator's error, so
//! values typed in one mode never survive into another. Submission
//! goes through `core::submission`, which silently refuses requests
//! whose preconditions are not met.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{login, login_as_guest, register, use_auth_context};
use crate::core::{AuthMode, AuthRequest, FormState, passwords_mismatch, submission};
use crate::ui::common::{
    CheckboxField, ErrorBanner, InfoPanel, LoadingButton, PasswordField, TabItem, TabPanel, Tabs,
    TextField,
};
use crate::ui::icon::{Icon, icons};

/// Tabbed authentication form card.
#[component]
pub fn AuthForm() -> impl IntoView {
    let auth = use_auth_context();

    let mode = RwSignal::new(AuthMode::default());
    let form = RwSignal::new(FormState::default());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);

    let active_tab = Signal::derive(move || mode.get().id());
    let loading = Signal::derive(move || auth.loading.get());

    // Switching tabs discards everything typed in the previous mode.
    let on_tab_change = Callback::new(move |id: &'static str| {
        mode.set(AuthMode::from_id(id));
        form.set(FormState::default());
        show_password.set(false);
        show_confirm.set(false);
        auth.clear_error();
    });

    // Every edit also clears the collaborator's error banner.
    let set_name = Callback::new(move |v: String| {
        form.update(|f| f.name = v);
        auth.clear_error();
    });
    let set_email = Callback::new(move |v: String| {
        form.update(|f| f.email = v);
        auth.clear_error();
    });
    let set_password = Callback::new(move |v: String| {
        form.update(|f| f.password = v);
        auth.clear_error();
    });
    let set_confirm = Callback::new(move |v: String| {
        form.update(|f| f.confirm_password = v);
        auth.clear_error();
    });
    let set_username = Callback::new(move |v: String| {
        form.update(|f| f.username = v);
        auth.clear_error();
    });
    let set_remember = Callback::new(move |v: bool| {
        form.update(|f| f.remember_me = v);
        auth.clear_error();
    });
    let set_terms = Callback::new(move |v: bool| {
        form.update(|f| f.accept_terms = v);
        auth.clear_error();
    });

    let toggle_password = Callback::new(move |_| show_password.update(|v| *v = !*v));
    let toggle_confirm = Callback::new(move |_| show_confirm.update(|v| *v = !*v));

    let confirm_error = Signal::derive(move || {
        form.with(passwords_mismatch)
            .then(|| "Passwords do not match".to_string())
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let active_mode = mode.get();
        let Some(request) = form.with(|f| submission(active_mode, f)) else {
            return;
        };

        spawn_local(async move {
            let result = match request {
                AuthRequest::Login { email, password } => login(&email, &password).await,
                AuthRequest::Register {
                    name,
                    email,
                    password,
                } => register(&name, &email, &password).await,
                AuthRequest::Guest { username } => login_as_guest(&username).await,
            };

            // The context already published the failure reactively.
            if let Err(err) = result {
                leptos::logging::warn!("{active_mode} request failed: {err}");
            }
        });
    };

    let tabs = vec![
        TabItem::new(AuthMode::Login.id(), "Sign In").with_icon(icons::USER),
        TabItem::new(AuthMode::Register.id(), "Register").with_icon(icons::USER_PLUS),
        TabItem::new(AuthMode::Guest.id(), "Guest").with_icon(icons::PLAY),
    ];

    view! {
        <div class="auth-card">
            // Logo and title
            <div class="auth-header">
                <div class="auth-logo">
                    <Icon name=icons::BOLT class="icon icon-xl" />
                </div>
                <h1 class="auth-title">"MaxWave"</h1>
                <p class="auth-subtitle">"An educational electromagnetism platform"</p>
            </div>

            <ErrorBanner
                error=auth.error
                on_dismiss=Callback::new(move |_| auth.clear_error())
            />

            <Tabs tabs=tabs active_tab=active_tab on_change=on_tab_change full_width=true />

            // Native validation stays off; `submission` is the only gate.
            <form on:submit=on_submit novalidate=true>
                <TabPanel tab_id=AuthMode::Login.id() active_tab=active_tab>
                    <div class="auth-panel">
                        <TextField
                            label="Email"
                            input_type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            icon=icons::MAIL
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=set_email
                        />
                        <PasswordField
                            label="Password"
                            placeholder="Enter your password"
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=set_password
                            visible=show_password.into()
                            on_toggle=toggle_password
                        />
                        <div class="auth-row">
                            <CheckboxField
                                label="Remember me"
                                checked=Signal::derive(move || form.with(|f| f.remember_me))
                                on_change=set_remember
                            />
                            <a href="#" class="auth-link">"Forgot your password?"</a>
                        </div>
                        <LoadingButton
                            label="Sign In"
                            loading_label="Signing in..."
                            loading=loading
                            class="btn-login"
                        />
                    </div>
                </TabPanel>

                <TabPanel tab_id=AuthMode::Register.id() active_tab=active_tab>
                    <div class="auth-panel">
                        <TextField
                            label="Full Name"
                            placeholder="Your name"
                            autocomplete="name"
                            icon=icons::USER
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=set_name
                        />
                        <TextField
                            label="Email"
                            input_type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            icon=icons::MAIL
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=set_email
                        />
                        <PasswordField
                            label="Password"
                            placeholder="Create a password"
                            autocomplete="new-password"
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=set_password
                            visible=show_password.into()
                            on_toggle=toggle_password
                        />
                        <PasswordField
                            label="Confirm Password"
                            placeholder="Repeat your password"
                            autocomplete="new-password"
                            value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                            on_input=set_confirm
                            visible=show_confirm.into()
                            on_toggle=toggle_confirm
                            error=confirm_error
                        />
                        <CheckboxField
                            label="I accept the terms and conditions"
                            checked=Signal::derive(move || form.with(|f| f.accept_terms))
                            on_change=set_terms
                        />
                        <LoadingButton
                            label="Create Account"
                            loading_label="Creating account..."
                            loading=loading
                            class="btn-register"
                        />
                    </div>
                </TabPanel>

                <TabPanel tab_id=AuthMode::Guest.id() active_tab=active_tab>
                    <div class="auth-panel">
                        <TextField
                            label="Username"
                            placeholder="Choose a username"
                            icon=icons::USER
                            hint="This name personalizes your experience"
                            value=Signal::derive(move || form.with(|f| f.username.clone()))
                            on_input=set_username
                        />
                        <InfoPanel title="Guest Mode">
                            <ul>
                                <li>"Full access to all modules"</li>
                                <li>"Progress is not saved"</li>
                                <li>"You can create an account later"</li>
                            </ul>
                        </InfoPanel>
                        <LoadingButton
                            label="Continue as Guest"
                            loading_label="Starting session..."
                            loading=loading
                            class="btn-guest"
                        />
                    </div>
                </TabPanel>
            </form>
        </div>
    }
}
