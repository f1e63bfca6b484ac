//! Session/authorization boundary for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session owns the token lifecycle: a token is acquired at login,
//! persisted across reloads by the token store, attached to outgoing
//! requests by the API client's authorization stage, and consulted by the
//! route guard before entering protected routes.
//!
//! The token slot is deliberately NOT ambient global state: `App` creates
//! one `Session` at startup and provides it via context to the pages and
//! the API client. Any holder may overwrite or clear the slot; access is
//! single-threaded in wasm so no locking is involved.


pub mod guard;
pub mod token_store;

use leptos_router::NavigateOptions;

use self::token_store::TokenStore;

/// Session context created once at application start.
///
/// "Logged in" is derived, not stored: it means a non-empty token is
/// present. No expiry is tracked; a stale token is indistinguishable from
/// a valid one until a server call rejects it.
#[derive(Clone, Default)]
pub struct Session {
    store: TokenStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a freshly issued token, replacing any previous one.
    pub fn establish(&self, token: &str) {
        self.store.set(token);
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// True iff a non-empty token is stored.
    pub fn is_logged_in(&self) -> bool {
        self.token().map_or(false, |token| !token.is_empty())
    }

    /// Drop the token. Idempotent.
    pub fn clear(&self) {
        self.store.clear();
    }
}

/// End the session: clear the token, then navigate to the login view.
///
/// Navigation stays injected so the session module carries no routing
/// dependency beyond the options type.
pub fn logout<F>(session: &Session, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    session.clear();
    navigate("/login", NavigateOptions::default());
}
