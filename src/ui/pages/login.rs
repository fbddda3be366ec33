//! Authentication page
//!
//! The entry screen of the platform: page chrome around the tabbed
//! auth form. Redirects to the gallery once a session is active.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthForm, AuthState, use_auth_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::ThemeToggle;

/// Authentication page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already signed in (member or guest)
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            let navigate = use_navigate();
            navigate("/applications", Default::default());
        }
    });

    view! {
        <Title text="MaxWave - Sign In" />

        <div class="page">
            <header class="page-header">
                <div class="page-header-inner">
                    <div class="brand">
                        <div class="brand-mark">
                            <Icon name=icons::BOLT />
                        </div>
                        <span class="brand-name">"MaxWave"</span>
                    </div>
                    <ThemeToggle />
                </div>
            </header>

            <main class="page-main page-main-centered">
                <AuthForm />
            </main>

            <footer class="page-footer">
                <p>"© 2025 MaxWave. All rights reserved."</p>
            </footer>
        </div>
    }
}
