use super::*;

#[test]
fn validate_registration_trims_name_and_email() {
    assert_eq!(
        validate_registration(" Alice ", " a@b.com ", "p"),
        Ok(("Alice".to_owned(), "a@b.com".to_owned(), "p".to_owned()))
    );
}

#[test]
fn validate_registration_requires_every_field() {
    assert_eq!(
        validate_registration("", "a@b.com", "p"),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_registration("Alice", "  ", "p"),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_registration("Alice", "a@b.com", ""),
        Err("Enter name, email, and password.")
    );
}
