//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and access-control
//! decisions from page and component logic to improve reuse and testability.

pub mod capability;
pub mod guard;
pub mod token_store;
