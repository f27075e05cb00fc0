use super::*;

#[test]
fn build_payload_trims_every_field() {
    let payload = build_payload(" Alice ", " a@b.com ", " Hello there ").unwrap();
    assert_eq!(payload.name, "Alice");
    assert_eq!(payload.email, "a@b.com");
    assert_eq!(payload.message, "Hello there");
}

#[test]
fn build_payload_rejects_missing_fields() {
    assert!(build_payload("", "a@b.com", "Hi").is_none());
    assert!(build_payload("Alice", "   ", "Hi").is_none());
    assert!(build_payload("Alice", "a@b.com", "").is_none());
}
