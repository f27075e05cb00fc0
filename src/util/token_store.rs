//! Durable persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only piece of session state that survives a reload. It
//! lives in browser `localStorage` under a fixed key; when storage is missing
//! (server build, disabled storage) every operation degrades to "absent"
//! instead of failing, so the session simply becomes in-memory only.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// localStorage key holding the raw bearer token.
const TOKEN_KEY: &str = "token";

/// Marker for a missing or inaccessible localStorage backend.
///
/// Never escapes this module: callers observe `None` reads and no-op writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("browser storage unavailable")]
pub struct StorageUnavailable;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StorageUnavailable> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageUnavailable)
}

/// Read the stored token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage().ok()?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token, replacing any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token. Absence of storage counts as success.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
