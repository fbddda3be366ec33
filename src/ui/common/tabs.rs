use leptos::prelude::*;

use crate::ui::icon::Icon;

/// One entry of a tab strip.
#[derive(Clone, Copy, PartialEq)]
pub struct TabItem {
    /// Stable identifier, matched against the active tab signal
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Optional icon name shown above the label
    pub icon: Option<&'static str>,
}

impl TabItem {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Tab strip for switching between mutually exclusive panels.
#[component]
pub fn Tabs(
    /// Tabs in display order
    tabs: Vec<TabItem>,
    /// Currently active tab id
    active_tab: Signal<&'static str>,
    /// Callback when a tab is selected
    on_change: Callback<&'static str>,
    /// Whether tabs share the full container width evenly
    #[prop(default = false)]
    full_width: bool,
) -> impl IntoView {
    let strip_class = if full_width {
        "tabs-list tabs-full-width"
    } else {
        "tabs-list"
    };

    view! {
        <div class=strip_class role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    let is_active = Signal::derive(move || active_tab.get() == tab.id);

                    view! {
                        <button
                            type="button"
                            class="tab-item"
                            class:tab-active=move || is_active.get()
                            on:click=move |_| on_change.run(tab.id)
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            aria-controls=format!("panel-{}", tab.id)
                        >
                            {tab.icon.map(|icon| view! { <Icon name=icon /> })}
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Panel shown while its tab is the active one.
#[component]
pub fn TabPanel(
    /// Tab id this panel belongs to
    tab_id: &'static str,
    /// Currently active tab id
    active_tab: Signal<&'static str>,
    /// Panel content
    children: Children,
) -> impl IntoView {
    let is_active = Signal::derive(move || active_tab.get() == tab_id);

    view! {
        <div
            class="tab-panel"
            role="tabpanel"
            id=format!("panel-{}", tab_id)
            style:display=move || if is_active.get() { "block" } else { "none" }
            aria-hidden=move || (!is_active.get()).to_string()
        >
            {children()}
        </div>
    }
}
