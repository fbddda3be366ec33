//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-main-centered">
            <div class="not-found">
                <div class="not-found-glyph">
                    <Icon name=icons::ALERT_CIRCLE class="icon icon-xl" />
                </div>

                <h1 class="not-found-code">"404"</h1>
                <h2 class="not-found-title">"Page Not Found"</h2>
                <p class="not-found-text">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="not-found-actions">
                    <A href="/" attr:class="btn-primary">
                        "Go to Sign In"
                    </A>
                    <A href="/applications" attr:class="btn-outline">
                        "Applications"
                    </A>
                </div>
            </div>
        </div>
    }
}
