use super::*;

fn session_with(token: Option<&str>) -> SessionState {
    SessionState {
        token: token.map(ToOwned::to_owned),
        identity: None,
    }
}

#[test]
fn header_absent_when_token_absent() {
    assert_eq!(authorization_header(&session_with(None)), None);
}

#[test]
fn header_absent_when_token_empty() {
    // A bare "Bearer " must never be emitted.
    assert_eq!(authorization_header(&session_with(Some(""))), None);
}

#[test]
fn header_carries_bearer_scheme() {
    assert_eq!(
        authorization_header(&session_with(Some("x"))).as_deref(),
        Some("Bearer x")
    );
}

#[test]
fn header_tracks_token_changes() {
    let a = authorization_header(&session_with(Some("a")));
    let b = authorization_header(&session_with(Some("b")));
    assert_ne!(a, b);
    assert_eq!(b.as_deref(), Some("Bearer b"));
}

#[test]
fn clearing_token_removes_header_entirely() {
    let mut session = session_with(Some("tok1"));
    assert!(authorization_header(&session).is_some());

    session.token = None;
    assert_eq!(authorization_header(&session), None);
}
