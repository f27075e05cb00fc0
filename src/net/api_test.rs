use super::*;

#[test]
fn contact_endpoint_formats_expected_path() {
    assert_eq!(contact_endpoint("c1"), "/api/contacts/c1");
}

#[test]
fn education_endpoint_formats_expected_path() {
    assert_eq!(education_endpoint("e1"), "/api/educations/e1");
}

#[test]
fn project_endpoint_uses_historical_portfolio_path() {
    assert_eq!(project_endpoint("p1"), "/api/portfolio/p1");
}

#[test]
fn account_role_endpoint_formats_expected_path() {
    assert_eq!(account_role_endpoint("u9"), "/api/users/u9/role");
}

#[test]
fn request_failed_message_formats_action_and_status() {
    assert_eq!(request_failed_message("sign in", 401), "sign in failed: 401");
    assert_eq!(request_failed_message("load users", 403), "load users failed: 403");
}

#[test]
fn service_message_prefers_body_message_field() {
    let body = r#"{"message":"Invalid credentials"}"#;
    assert_eq!(
        service_message(body, "sign in failed: 401".to_owned()),
        "Invalid credentials"
    );
}

#[test]
fn service_message_falls_back_for_non_json_bodies() {
    assert_eq!(
        service_message("<html>Bad Gateway</html>", "sign in failed: 502".to_owned()),
        "sign in failed: 502"
    );
    assert_eq!(
        service_message("", "sign up failed: 500".to_owned()),
        "sign up failed: 500"
    );
}
