//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration — guard installation, fetches,
//! pending/error signals — and delegates rendering details to `components`.

pub mod contacts;
pub mod dashboard;
pub mod educations;
pub mod projects;
pub mod sign_in;
pub mod sign_up;
pub mod users;
