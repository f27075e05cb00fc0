//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and create forms while reading the shared
//! session from the Leptos context provider.

pub mod contact_form;
pub mod education_form;
pub mod nav_bar;
pub mod project_form;
