use super::*;

#[test]
fn allows_when_logged_in() {
    let session = Session::new();
    session.establish("abc123");
    assert_eq!(evaluate(&session), RouteDecision::Allow);
}

#[test]
fn denies_with_login_redirect_when_no_token() {
    let session = Session::new();
    assert_eq!(evaluate(&session), RouteDecision::Deny { redirect: "/login" });
}

#[test]
fn denies_when_stored_token_is_empty() {
    let session = Session::new();
    session.establish("");
    assert_eq!(evaluate(&session), RouteDecision::Deny { redirect: "/login" });
}

#[test]
fn decision_follows_session_state_at_evaluation_time() {
    let session = Session::new();
    session.establish("abc123");
    assert_eq!(evaluate(&session), RouteDecision::Allow);
    session.clear();
    assert_eq!(evaluate(&session), RouteDecision::Deny { redirect: "/login" });
}
