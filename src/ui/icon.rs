use leptos::prelude::*;

/// Inline SVG icon, selected by name from the [`icons`] module.
#[component]
pub fn Icon(
    /// Icon name (see [`icons`])
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon_path(name) />
        </svg>
    }
}

/// Path data for each icon name. Unknown names render the bolt.
fn icon_path(name: &'static str) -> &'static str {
    match name {
        icons::RADIO => {
            "M12 12m-2 0a2 2 0 104 0 2 2 0 10-4 0M8.5 8.5a5 5 0 000 7M15.5 8.5a5 5 0 010 7\
             M5.6 5.6a9 9 0 000 12.8M18.4 5.6a9 9 0 010 12.8"
        }
        icons::WIFI => {
            "M8.1 16.05a5.5 5.5 0 017.8 0M5.3 13.25a9.5 9.5 0 0113.4 0\
             M2.5 10.45a13.5 13.5 0 0119 0M12 20h.01"
        }
        icons::PHONE => "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z",
        icons::MEDICAL => "M12 9v6M9 12h6M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::SATELLITE => {
            "M4 10l6-6 4 4-6 6-4-4zM10 14l-2 2M13 7l4 4M14 14l2-2 4 4-2 2-4-4z\
             M15 19a4 4 0 004-4"
        }
        icons::EYE => {
            "M15 12a3 3 0 11-6 0 3 3 0 016 0zM2.458 12C3.732 7.943 7.523 5 12 5\
             c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7\
             -4.477 0-8.268-2.943-9.542-7z"
        }
        icons::EYE_OFF => {
            "M13.875 18.825A10.05 10.05 0 0112 19c-4.478 0-8.268-2.943-9.543-7\
             a9.97 9.97 0 011.563-3.029m5.858.908a3 3 0 114.243 4.243\
             M9.878 9.878L3 3m6.878 6.878L21 21M6.59 6.59A9.953 9.953 0 0112 5\
             c4.478 0 8.268 2.943 9.543 7a10.025 10.025 0 01-4.132 5.411"
        }
        icons::LOADER => {
            "M12 3v3m6.36-.36l-2.12 2.12M21 12h-3m.36 6.36l-2.12-2.12\
             M12 21v-3m-6.36.36l2.12-2.12M3 12h3m-.36-6.36l2.12 2.12"
        }
        icons::ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::INFO_CIRCLE => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::CHECK => "M5 13l4 4L19 7",
        icons::X => "M6 18L18 6M6 6l12 12",
        icons::SUN => {
            "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707\
             M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707\
             M16 12a4 4 0 11-8 0 4 4 0 018 0z"
        }
        icons::MOON => "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z",
        icons::USER => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
        icons::USER_PLUS => {
            "M18 9v6M21 12h-6M13 7a4 4 0 11-8 0 4 4 0 018 0z\
             M3 21a7 7 0 0112.3-4.6"
        }
        icons::PLAY => {
            "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832\
             l3.197-2.132a1 1 0 000-1.664zM21 12a9 9 0 11-18 0 9 9 0 0118 0z"
        }
        icons::MAIL => {
            "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7\
             a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
        }
        icons::LOCK => {
            "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6\
             a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"
        }
        icons::LOGOUT => {
            "M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7\
             a3 3 0 013-3h4a3 3 0 013 3v1"
        }
        _ => icons::BOLT_PATH,
    }
}

/// Predefined icon names
pub mod icons {
    pub const BOLT: &str = "bolt";
    pub const RADIO: &str = "radio";
    pub const WIFI: &str = "wifi";
    pub const PHONE: &str = "phone";
    pub const MEDICAL: &str = "medical";
    pub const SATELLITE: &str = "satellite";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const LOADER: &str = "loader";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const INFO_CIRCLE: &str = "info-circle";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const USER: &str = "user";
    pub const USER_PLUS: &str = "user-plus";
    pub const PLAY: &str = "play";
    pub const MAIL: &str = "mail";
    pub const LOCK: &str = "lock";
    pub const LOGOUT: &str = "logout";

    pub(super) const BOLT_PATH: &str = "M13 10V3L4 14h7v7l9-11h-7z";
}
