use super::*;
use crate::net::types::{Identity, Role};

fn session_with(token: Option<&str>) -> SessionState {
    SessionState {
        token: token.map(ToOwned::to_owned),
        identity: None,
    }
}

#[test]
fn absent_token_redirects_to_signin() {
    assert_eq!(
        evaluate(&session_with(None), "/contacts"),
        GuardDecision::Redirect("/signin")
    );
}

#[test]
fn empty_token_redirects_to_signin() {
    assert_eq!(
        evaluate(&session_with(Some("")), "/projects"),
        GuardDecision::Redirect("/signin")
    );
}

#[test]
fn any_token_allows() {
    assert_eq!(evaluate(&session_with(Some("x")), "/"), GuardDecision::Allow);
}

#[test]
fn token_only_session_allows_without_identity() {
    // A bootstrapped session has a token but no resolved identity; the guard
    // must still admit it.
    let state = session_with(Some("tok1"));
    assert!(state.identity.is_none());
    assert_eq!(evaluate(&state, "/educations"), GuardDecision::Allow);
}

#[test]
fn decision_is_uniform_across_guarded_paths() {
    let state = SessionState {
        token: Some("tok1".to_owned()),
        identity: Some(Identity {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            name: "Alice".to_owned(),
            role: Role::User,
        }),
    };
    for path in ["/", "/contacts", "/educations", "/projects", "/users"] {
        assert_eq!(evaluate(&state, path), GuardDecision::Allow);
    }
    for path in ["/", "/contacts", "/educations", "/projects", "/users"] {
        assert_eq!(
            evaluate(&SessionState::default(), path),
            GuardDecision::Redirect("/signin")
        );
    }
}
