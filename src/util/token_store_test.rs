#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_absent_without_browser_storage() {
    assert!(load().is_none());
}

#[test]
fn save_and_clear_are_noops_without_browser_storage() {
    save("tok1");
    assert!(load().is_none());
    clear();
    assert!(load().is_none());
}

#[test]
fn storage_unavailable_formats_message() {
    assert_eq!(StorageUnavailable.to_string(), "browser storage unavailable");
}
