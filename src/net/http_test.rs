use super::*;

#[test]
fn api_url_joins_onto_the_dev_base() {
    assert_eq!(api_url("/courses/"), "http://localhost:8080/api/courses/");
    assert_eq!(api_url("/auth/login"), "http://localhost:8080/api/auth/login");
}

#[test]
fn authorization_header_wraps_token_as_bearer() {
    assert_eq!(
        authorization_header(Some("abc123")),
        Some("Bearer abc123".to_owned())
    );
}

#[test]
fn authorization_header_skips_missing_token() {
    assert_eq!(authorization_header(None), None);
}

#[test]
fn authorization_header_skips_empty_token() {
    assert_eq!(authorization_header(Some("")), None);
}
