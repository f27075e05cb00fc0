use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  a@b.com  ", "p"),
        Ok(("a@b.com".to_owned(), "p".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(
        validate_credentials("   ", "p"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("a@b.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    // Passwords may legitimately start or end with whitespace.
    assert_eq!(
        validate_credentials("a@b.com", " p "),
        Ok(("a@b.com".to_owned(), " p ".to_owned()))
    );
}
