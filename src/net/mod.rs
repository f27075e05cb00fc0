//! Network boundary to the remote portfolio service.
//!
//! DESIGN
//! ======
//! `types` mirrors the service's JSON, `api` owns the HTTP calls, and
//! `authorize` derives the per-call `Authorization` header from the session.

pub mod api;
pub mod authorize;
pub mod types;
