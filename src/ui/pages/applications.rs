//! Applications gallery page
//!
//! Renders the fixed "applications of electromagnetism" catalog as a
//! grid of cards. The cards enter with a delay staggered by index;
//! the stagger is cosmetic and never reorders the catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::core::{TOPICS, Topic, entrance_delay_ms};
use crate::ui::auth::{AuthState, logout, use_auth_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::ThemeToggle;

/// Applications gallery page component
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let auth = use_auth_context();

    // The gallery sits behind the sign-in screen; guests qualify.
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Unauthenticated) {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_sign_out = move |_| {
        spawn_local(async move {
            logout().await;
        });
    };

    view! {
        <Title text="MaxWave - Technology Applications" />

        <div class="page">
            <header class="page-header">
                <div class="page-header-inner">
                    <div class="brand">
                        <div class="brand-mark">
                            <Icon name=icons::BOLT />
                        </div>
                        <span class="brand-name">"MaxWave"</span>
                    </div>
                    <div class="page-header-actions">
                        {move || {
                            auth.user()
                                .map(|user| view! { <span class="user-name">{user.username}</span> })
                        }}
                        <button class="btn-icon" on:click=on_sign_out aria-label="Sign out">
                            <Icon name=icons::LOGOUT />
                        </button>
                        <ThemeToggle />
                    </div>
                </div>
            </header>

            <main class="page-main">
                <section class="gallery-intro">
                    <h1 class="gallery-title">"Technology Applications"</h1>
                    <p class="gallery-subtitle">
                        "Discover how electromagnetism powers modern technology"
                    </p>
                </section>

                <div class="gallery-grid">
                    {TOPICS
                        .iter()
                        .enumerate()
                        .map(|(index, topic)| {
                            view! { <TopicCard topic=topic delay_ms=entrance_delay_ms(index) /> }
                        })
                        .collect_view()}
                </div>
            </main>

            <footer class="page-footer">
                <p>"© 2025 MaxWave. All rights reserved."</p>
            </footer>
        </div>
    }
}

/// One gallery card: icon, title, lead, details, and a "Learn More"
/// affordance with no behavior yet.
#[component]
fn TopicCard(
    topic: &'static Topic,
    /// Entrance animation delay in milliseconds
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <article
            class="topic-card"
            id=topic.id
            style=format!("--accent: {}; animation-delay: {}ms;", topic.accent, delay_ms)
        >
            <div class="topic-card-head">
                <div class="topic-card-avatar">
                    <Icon name=topic.icon class="icon icon-lg" />
                </div>
                <h3 class="topic-card-title">{topic.title}</h3>
            </div>

            <p class="topic-card-description">{topic.description}</p>
            <p class="topic-card-details">{topic.details}</p>

            <button type="button" class="topic-card-cta">
                "Learn More"
            </button>
        </article>
    }
}
