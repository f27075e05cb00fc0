use super::*;

#[test]
fn role_from_value_parses_wire_values() {
    assert_eq!(role_from_value("user"), Some(Role::User));
    assert_eq!(role_from_value("admin"), Some(Role::Admin));
}

#[test]
fn role_from_value_rejects_unknown_values() {
    assert_eq!(role_from_value(""), None);
    assert_eq!(role_from_value("root"), None);
    assert_eq!(role_from_value("Admin"), None);
}
