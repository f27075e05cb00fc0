use super::*;
use crate::net::types::Role;

fn identity(role: Role) -> Identity {
    Identity {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "Alice".to_owned(),
        role,
    }
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.identity.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn stored_token_restores_without_identity() {
    let state = SessionState::from_stored_token(Some("tok1".to_owned()));
    assert_eq!(state.token.as_deref(), Some("tok1"));
    assert!(state.identity.is_none());
    assert!(state.is_authenticated());
}

#[test]
fn signed_in_sets_token_and_identity_together() {
    let state = SessionState::signed_in("tok1".to_owned(), identity(Role::User));
    assert_eq!(state.token.as_deref(), Some("tok1"));
    assert_eq!(state.identity.as_ref().map(|i| i.role), Some(Role::User));
}

#[test]
fn identity_present_implies_token_present() {
    // Every constructor that can yield an identity also yields a token.
    let signed_in = SessionState::signed_in("tok1".to_owned(), identity(Role::Admin));
    assert!(signed_in.identity.is_none() || signed_in.token.is_some());

    let restored = SessionState::from_stored_token(Some("tok1".to_owned()));
    assert!(restored.identity.is_none() || restored.token.is_some());

    let cleared = SessionState::default();
    assert!(cleared.identity.is_none() || cleared.token.is_some());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = SessionState::from_stored_token(Some(String::new()));
    assert!(!state.is_authenticated());
}

// =============================================================
// bootstrap / sign_out
// =============================================================

#[test]
fn bootstrap_without_storage_is_anonymous() {
    // Non-hydrate builds have no backing storage; bootstrap degrades to an
    // in-memory-only anonymous session instead of failing.
    let state = bootstrap();
    assert_eq!(state, SessionState::default());
}

#[test]
fn sign_out_clears_everything_and_is_idempotent() {
    let session = RwSignal::new(SessionState::signed_in(
        "tok1".to_owned(),
        identity(Role::Admin),
    ));

    sign_out(session);
    assert_eq!(session.get_untracked(), SessionState::default());

    // Signing out while anonymous yields the same state.
    sign_out(session);
    assert_eq!(session.get_untracked(), SessionState::default());
}

// =============================================================
// Errors
// =============================================================

#[test]
fn authentication_error_surfaces_service_message_verbatim() {
    let err = SessionError::Authentication("Invalid credentials".to_owned());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn registration_error_surfaces_service_message_verbatim() {
    let err = SessionError::Registration("Email already in use".to_owned());
    assert_eq!(err.to_string(), "Email already in use");
}
