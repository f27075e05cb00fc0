//! Authorization header derivation for outbound API calls.
//!
//! DESIGN
//! ======
//! Every call computes its header from a fresh session snapshot instead of
//! mutating a shared client default, so sign-out takes effect on the very next
//! request and nothing holds a stale credential.

#[cfg(test)]
#[path = "authorize_test.rs"]
mod authorize_test;

use crate::state::session::SessionState;

/// Compute the `Authorization` header value for the current session.
///
/// Returns `None` for an absent or empty token — the header must be omitted
/// entirely in that case, never sent as a bare `"Bearer "`.
pub fn authorization_header(session: &SessionState) -> Option<String> {
    let token = session.token.as_deref()?;
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

/// Attach the session's bearer header to an outgoing request, if present.
#[cfg(feature = "hydrate")]
pub fn apply(
    builder: gloo_net::http::RequestBuilder,
    session: &SessionState,
) -> gloo_net::http::RequestBuilder {
    match authorization_header(session) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}
