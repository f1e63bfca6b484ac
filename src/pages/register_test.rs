use super::*;

#[test]
fn validate_registration_input_trims_identity_fields() {
    let input =
        validate_registration_input(" ayan ", " Ayan ", " Seitkali ", " a@b.com ", "secret1")
            .unwrap();
    assert_eq!(
        input,
        RegistrationInput {
            username: "ayan".to_owned(),
            name: "Ayan".to_owned(),
            surname: "Seitkali".to_owned(),
            email: "a@b.com".to_owned(),
            password: "secret1".to_owned(),
        }
    );
}

#[test]
fn validate_registration_input_rejects_any_missing_field() {
    assert_eq!(
        validate_registration_input("", "Ayan", "Seitkali", "a@b.com", "secret1"),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        validate_registration_input("ayan", "Ayan", "Seitkali", "   ", "secret1"),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        validate_registration_input("ayan", "Ayan", "Seitkali", "a@b.com", ""),
        Err("Please fill in all fields.")
    );
}

#[test]
fn duplicate_email_maps_to_the_conflict_message() {
    assert_eq!(register_error_message(&ApiError::Conflict), "Email already exists");
}

#[test]
fn validation_failure_maps_to_the_credentials_hint() {
    assert_eq!(
        register_error_message(&ApiError::Validation),
        "Please enter a valid email and password (minimum 6 characters)"
    );
}

#[test]
fn other_failures_map_to_the_generic_message() {
    assert_eq!(
        register_error_message(&ApiError::Status(500)),
        "An error occurred. Please try again later."
    );
    assert_eq!(
        register_error_message(&ApiError::Network("offline".to_owned())),
        "An error occurred. Please try again later."
    );
}
