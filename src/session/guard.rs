//! Route guard for views that require an established session.
//!
//! The decision is purely local: a present-but-invalid token still grants
//! access until the next rejected API call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::Session;

/// Outcome of evaluating a protected route, independent of any routing
/// framework's calling convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Navigation may proceed.
    Allow,
    /// Navigation must be redirected instead of merely blocked.
    Deny { redirect: &'static str },
}

/// Allow iff the session reports logged-in. No network round-trip.
pub fn evaluate(session: &Session) -> RouteDecision {
    if session.is_logged_in() {
        RouteDecision::Allow
    } else {
        RouteDecision::Deny { redirect: "/login" }
    }
}

/// Wrapper for protected routes.
///
/// Children are only mounted when the guard allows entry, so a denied
/// navigation never starts the protected view's data loading. On deny the
/// browser is sent to the login view.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    match evaluate(&session) {
        RouteDecision::Allow => children().into_any(),
        RouteDecision::Deny { redirect } => {
            // Defer navigation until after render, per router requirements.
            Effect::new(move || {
                navigate(redirect, NavigateOptions::default());
            });
            ().into_any()
        }
    }
}
