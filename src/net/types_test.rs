use super::*;

#[test]
fn role_deserializes_from_lowercase_wire_values() {
    assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}

#[test]
fn role_as_str_matches_wire_format() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn sign_in_response_parses_token_and_user() {
    let body = serde_json::json!({
        "token": "tok1",
        "user": { "id": "1", "email": "a@b.com", "name": "Alice", "role": "user" }
    });
    let parsed: SignInResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.token, "tok1");
    assert_eq!(parsed.user.id, "1");
    assert_eq!(parsed.user.role, Role::User);
}

#[test]
fn contact_maps_mongo_id_field() {
    let body = serde_json::json!({
        "_id": "c1",
        "name": "Visitor",
        "email": "v@example.com",
        "message": "Hello"
    });
    let parsed: Contact = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.id, "c1");
    assert_eq!(parsed.message, "Hello");
}

#[test]
fn project_link_defaults_to_empty_when_missing() {
    let body = serde_json::json!({
        "_id": "p1",
        "title": "Site",
        "description": "Portfolio site"
    });
    let parsed: Project = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.link, "");
}

#[test]
fn account_summary_parses_admin_role() {
    let body = serde_json::json!({
        "_id": "u9",
        "name": "Root",
        "email": "root@example.com",
        "role": "admin"
    });
    let parsed: AccountSummary = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.role, Role::Admin);
}
