//! Form state and submission gating for the authentication screen.
//!
//! The tabbed form owns a single [`FormState`] shared by all three
//! modes; switching modes discards it wholesale so values typed in one
//! mode can never leak into a submission from another. [`submission`]
//! is the only path from field values to an [`AuthRequest`]; when a
//! mode's preconditions fail it returns `None` and nothing is sent.

use derive_more::Display;

/// Minimum length of a guest display name, counted after trimming.
pub const GUEST_NAME_MIN: usize = 2;

/// Form modes selectable from the tab strip.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    #[display("login")]
    Login,
    #[display("register")]
    Register,
    #[display("guest")]
    Guest,
}

impl AuthMode {
    /// All modes in tab order.
    pub const ALL: [AuthMode; 3] = [AuthMode::Login, AuthMode::Register, AuthMode::Guest];

    /// Stable identifier used for tab wiring and panel ids.
    pub fn id(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
            AuthMode::Guest => "guest",
        }
    }

    /// Inverse of [`AuthMode::id`]; unknown ids fall back to login.
    pub fn from_id(id: &str) -> Self {
        match id {
            "register" => AuthMode::Register,
            "guest" => AuthMode::Guest,
            _ => AuthMode::Login,
        }
    }
}

/// Editable field values and checkbox flags owned by the
/// authentication form. Created empty, mutated field-by-field on
/// input, and replaced with `Self::default()` on every tab change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub username: String,
    pub remember_me: bool,
    pub accept_terms: bool,
}

/// Payload handed to the auth collaborator on a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    Guest { username: String },
}

/// Build the request for the active mode, or `None` when the mode's
/// preconditions are not met and the submission must be suppressed.
pub fn submission(mode: AuthMode, form: &FormState) -> Option<AuthRequest> {
    match mode {
        AuthMode::Login => {
            if form.email.is_empty() || form.password.is_empty() {
                return None;
            }
            Some(AuthRequest::Login {
                email: form.email.clone(),
                password: form.password.clone(),
            })
        }
        AuthMode::Register => {
            if form.name.is_empty()
                || form.email.is_empty()
                || form.password.is_empty()
                || form.confirm_password.is_empty()
            {
                return None;
            }
            if form.password != form.confirm_password {
                return None;
            }
            if !form.accept_terms {
                return None;
            }
            Some(AuthRequest::Register {
                name: form.name.clone(),
                email: form.email.clone(),
                password: form.password.clone(),
            })
        }
        AuthMode::Guest => {
            if form.username.trim().chars().count() < GUEST_NAME_MIN {
                return None;
            }
            // Only validation trims; the raw value is what gets sent.
            Some(AuthRequest::Guest {
                username: form.username.clone(),
            })
        }
    }
}

/// Whether the inline "Passwords do not match" hint should show.
/// Silent while the confirm field is still empty.
pub fn passwords_mismatch(form: &FormState) -> bool {
    !form.confirm_password.is_empty() && form.password != form.confirm_password
}
