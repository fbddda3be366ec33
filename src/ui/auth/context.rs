//! Auth context for managing user authentication state
//!
//! This module is the authentication collaborator the sign-in form
//! delegates to. It owns:
//! - the current session and user
//! - the shared `loading` and `error` signals the form renders from
//! - the login / register / guest-login operations against the auth API
//! - session persistence to localStorage, verified on hydration
//!
//! The form itself never classifies errors or touches the session; it
//! only reads the reactive fields and calls `clear_error`.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

/// User information from the auth API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    /// Set for sessions created through guest login
    #[serde(default)]
    pub guest: bool,
}

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, restoring a persisted session
    #[default]
    Loading,
    /// No session
    Unauthenticated,
    /// Active session (member or guest)
    Authenticated(User),
}

/// Error payload returned by the auth API on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthApiError {
    pub error: String,
    pub code: String,
}

/// Session persisted between visits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(dead_code)]
struct Session {
    token: String,
    user: User,
}

/// Auth context providing authentication state and shared operation
/// status to the component tree
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Bearer token of the active session
    token: RwSignal<Option<String>>,
    /// Whether an auth operation is in flight
    pub loading: RwSignal<bool>,
    /// Error message from the last failed operation
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Check if a session (member or guest) is active
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[allow(dead_code)]
const STORAGE_KEY_SESSION: &str = "maxwave_session";

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start Unauthenticated on both server and client to avoid a
    // hydration mismatch; the restore effect below upgrades the state.
    let ctx = AuthContext {
        state: RwSignal::new(AuthState::Unauthenticated),
        token: RwSignal::new(None),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };

    // Restore a persisted session after hydration (client-side only).
    // The token is always re-verified with the server before trusting
    // the stored user.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let Some(session) = load_session() else {
                ctx.state.set(AuthState::Unauthenticated);
                return;
            };

            ctx.state.set(AuthState::Loading);
            spawn_local(async move {
                match fetch_current_user(&session.token).await {
                    Ok(user) => {
                        save_session(&Session {
                            token: session.token.clone(),
                            user: user.clone(),
                        });
                        ctx.token.set(Some(session.token));
                        ctx.state.set(AuthState::Authenticated(user));
                    }
                    Err(_) => {
                        clear_session();
                        ctx.token.set(None);
                        ctx.state.set(AuthState::Unauthenticated);
                    }
                }
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct GuestBody {
    username: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct SessionResponse {
    token: String,
    user: User,
}

/// Login with email and password
#[cfg(not(feature = "ssr"))]
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    let body = LoginBody {
        email: email.to_string(),
        password: password.to_string(),
    };
    run_auth_request("/api/auth/login", &body).await
}

#[cfg(feature = "ssr")]
pub async fn login(_email: &str, _password: &str) -> Result<User, String> {
    Err("Login not available on server".to_string())
}

/// Register a new account
#[cfg(not(feature = "ssr"))]
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, String> {
    let body = RegisterBody {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    run_auth_request("/api/auth/register", &body).await
}

#[cfg(feature = "ssr")]
pub async fn register(_name: &str, _email: &str, _password: &str) -> Result<User, String> {
    Err("Register not available on server".to_string())
}

/// Start an unsaved guest session under the given display name
#[cfg(not(feature = "ssr"))]
pub async fn login_as_guest(username: &str) -> Result<User, String> {
    let body = GuestBody {
        username: username.to_string(),
    };
    run_auth_request("/api/auth/guest", &body).await
}

#[cfg(feature = "ssr")]
pub async fn login_as_guest(_username: &str) -> Result<User, String> {
    Err("Guest login not available on server".to_string())
}

/// Logout the current user
#[cfg(not(feature = "ssr"))]
pub async fn logout() {
    let ctx = use_auth_context();

    // Best effort: tell the server, but clear local state regardless.
    if let Some(token) = ctx.token.get_untracked() {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await;
    }

    clear_session();
    ctx.token.set(None);
    ctx.state.set(AuthState::Unauthenticated);
}

#[cfg(feature = "ssr")]
pub async fn logout() {}

/// Shared driver for the three auth operations: flips the loading
/// flag around the request, publishes failures to the error signal,
/// and installs the session on success.
#[cfg(not(feature = "ssr"))]
async fn run_auth_request<B: Serialize>(path: &'static str, body: &B) -> Result<User, String> {
    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let result = post_session(path, body).await;

    ctx.loading.set(false);

    match result {
        Ok(session) => {
            save_session(&session);
            ctx.token.set(Some(session.token));
            ctx.state.set(AuthState::Authenticated(session.user.clone()));
            Ok(session.user)
        }
        Err(message) => {
            ctx.error.set(Some(message.clone()));
            Err(message)
        }
    }
}

#[cfg(not(feature = "ssr"))]
async fn post_session<B: Serialize>(path: &'static str, body: &B) -> Result<Session, String> {
    let response = gloo_net::http::Request::post(path)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        let session: SessionResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(Session {
            token: session.token,
            user: session.user,
        })
    } else {
        let err: AuthApiError = response.json().await.map_err(|e| e.to_string())?;
        Err(err.error)
    }
}

/// Fetch the user behind a token, verifying the token along the way
#[cfg(not(feature = "ssr"))]
async fn fetch_current_user(token: &str) -> Result<User, String> {
    let response = gloo_net::http::Request::get("/api/auth/me")
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err("Failed to fetch user".to_string());
    }

    response.json().await.map_err(|e| e.to_string())
}

/// Save the session to localStorage
#[cfg(not(feature = "ssr"))]
fn save_session(session: &Session) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(
                STORAGE_KEY_SESSION,
                &serde_json::to_string(session).unwrap_or_default(),
            );
        }
    }
}

/// Load a previously persisted session from localStorage
#[cfg(not(feature = "ssr"))]
fn load_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY_SESSION).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the persisted session from localStorage
#[cfg(not(feature = "ssr"))]
fn clear_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_SESSION);
        }
    }
}
