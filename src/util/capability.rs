//! Role-derived UI capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! A rendering filter only: it decides which controls appear, while the remote
//! service re-checks every mutation. A wrong answer here costs UX, never
//! security.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

use crate::net::types::{Identity, Role};

/// UI actions pages ask permission for before rendering a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

/// Whether `identity` may perform `action`.
///
/// Absent identity denies everything — including after a bare reload, when the
/// session holds a token but no resolved identity. Reads need any identity;
/// mutations need the admin role.
pub fn can(identity: Option<&Identity>, action: Action) -> bool {
    let Some(identity) = identity else {
        return false;
    };
    match action {
        Action::Read => true,
        Action::Create | Action::Update | Action::Delete => identity.role == Role::Admin,
    }
}
