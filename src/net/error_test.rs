use super::*;

#[test]
fn from_status_classifies_the_known_codes() {
    assert_eq!(ApiError::from_status(400), ApiError::Validation);
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(409), ApiError::Conflict);
}

#[test]
fn from_status_keeps_unknown_codes() {
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    assert_eq!(ApiError::from_status(418), ApiError::Status(418));
}

#[test]
fn status_round_trips_for_http_derived_errors() {
    for code in [400, 401, 403, 409, 500, 503] {
        assert_eq!(ApiError::from_status(code).status(), Some(code));
    }
}

#[test]
fn transport_errors_carry_no_status() {
    assert_eq!(ApiError::Network("connection refused".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("missing field".to_owned()).status(), None);
}

#[test]
fn display_includes_the_unclassified_status_code() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed with status 502");
}
