use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "pass word"),
        Ok(("user@example.com".to_owned(), "pass word".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "secret1"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validation_failure_maps_to_the_credentials_hint() {
    assert_eq!(
        login_error_message(&ApiError::Validation),
        "Please enter a valid email and password (minimum 6 characters)"
    );
}

#[test]
fn rejected_credentials_map_to_the_invalid_login_message() {
    assert_eq!(login_error_message(&ApiError::Unauthorized), "Invalid email or password");
}

#[test]
fn other_failures_map_to_the_generic_message() {
    for err in [
        ApiError::Conflict,
        ApiError::Status(500),
        ApiError::Network("offline".to_owned()),
        ApiError::Decode("bad body".to_owned()),
    ] {
        assert_eq!(
            login_error_message(&err),
            "An error occurred. Please try again later."
        );
    }
}
