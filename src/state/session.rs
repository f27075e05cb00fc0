//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single authoritative record of "who is logged in". It is held in an
//! `RwSignal` provided via context from `App`; route guards, the request
//! authorizer, and capability checks all read snapshots of it. The only
//! mutation paths are the four operations below — `bootstrap`, `sign_in`,
//! `sign_up`, `sign_out` — so every transition is auditable in one place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Identity;
use crate::util::token_store;

/// Errors surfaced by the session operations. Never retried; the caller shows
/// the message and waits for the next user action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Sign-in rejected or unreachable; carries the service's message.
    #[error("{0}")]
    Authentication(String),
    /// Sign-up rejected or unreachable; carries the service's message.
    #[error("{0}")]
    Registration(String),
}

/// Authentication state: bearer token plus the resolved identity.
///
/// Invariant: `identity` is present only if `token` is present. The converse
/// does not hold — a session restored from storage carries a token with no
/// identity until the next explicit sign-in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub identity: Option<Identity>,
}

impl SessionState {
    /// Whether the session counts as authenticated: a non-empty token.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    fn from_stored_token(token: Option<String>) -> Self {
        Self { token, identity: None }
    }

    fn signed_in(token: String, identity: Identity) -> Self {
        Self {
            token: Some(token),
            identity: Some(identity),
        }
    }
}

/// Build the initial session from the credential store.
///
/// A bare reload restores the token only. The token is never decoded to
/// recover the identity, so role-gated controls stay hidden until the next
/// explicit sign-in.
pub fn bootstrap() -> SessionState {
    SessionState::from_stored_token(token_store::load())
}

/// Authenticate against the remote service.
///
/// On success the session is replaced wholesale from the response and the
/// token persisted. On failure both session and store are left untouched.
///
/// # Errors
///
/// `SessionError::Authentication` carrying the service's message.
pub async fn sign_in(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), SessionError> {
    let response = api::sign_in(email, password)
        .await
        .map_err(SessionError::Authentication)?;
    token_store::save(&response.token);
    session.set(SessionState::signed_in(response.token, response.user));
    Ok(())
}

/// Register a new account.
///
/// Does not authenticate and mutates nothing — a successful sign-up still
/// requires an explicit sign-in.
///
/// # Errors
///
/// `SessionError::Registration` carrying the service's message.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<(), SessionError> {
    api::sign_up(name, email, password)
        .await
        .map_err(SessionError::Registration)
}

/// Clear the session and the stored token.
///
/// Idempotent and infallible: signing out an anonymous session is a no-op,
/// and storage errors are swallowed by the store.
pub fn sign_out(session: RwSignal<SessionState>) {
    token_store::clear();
    session.set(SessionState::default());
}
