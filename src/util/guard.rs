//! Route guarding for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page applies identical redirect behavior: evaluate the pure
//! guard against the current session and navigate to the sign-in page on
//! rejection. Evaluation is synchronous and touches only already-resident
//! state — never the network.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect target for rejected navigation.
pub const SIGNIN_PATH: &str = "/signin";

/// Outcome of a guard evaluation for a requested view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allow,
    /// Navigate to the given path instead.
    Redirect(&'static str),
}

/// Decide whether the session may enter the view at `path`.
///
/// Token presence alone suffices — the identity need not be resolved, matching
/// the token-only restore performed by bootstrap. An empty token counts as
/// absent. The policy is uniform across guarded paths.
pub fn evaluate(session: &SessionState, path: &str) -> GuardDecision {
    let _ = path;
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(SIGNIN_PATH)
    }
}

/// Redirect to the sign-in page whenever the session loses its token.
///
/// Guarded pages install this once on mount; the effect re-runs on every
/// session change, so signing out anywhere bounces the user immediately.
pub fn install_signin_redirect<F>(session: RwSignal<SessionState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = evaluate(&session.get(), path) {
            navigate(target, NavigateOptions::default());
        }
    });
}
