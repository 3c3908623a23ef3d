use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  alice@example.com  ", " hunter2 "),
        Ok(("alice@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("alice@example.com", ""),
        Err("Enter both email and password.")
    );
}
