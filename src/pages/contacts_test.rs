use super::*;

#[test]
fn initial_letter_uppercases_first_char() {
    assert_eq!(initial_letter("alice"), 'A');
    assert_eq!(initial_letter("Bob"), 'B');
}

#[test]
fn initial_letter_falls_back_for_empty_name() {
    assert_eq!(initial_letter(""), '?');
}

#[test]
fn initial_letter_handles_non_ascii() {
    assert_eq!(initial_letter("étienne"), 'É');
}
