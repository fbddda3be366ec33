//! Authentication UI module
//!
//! The tabbed authentication form and the auth context it delegates
//! credential handling to.

mod auth_form;
mod context;

pub use auth_form::AuthForm;
pub use context::{AuthContext, AuthState, User, logout, provide_auth_context, use_auth_context};
