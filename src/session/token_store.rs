//! Durable storage for the authentication token.
//!
//! Client-side (hydrate): backed by `localStorage` so the token survives
//! navigation and full page reloads.
//! Server-side and host tests: backed by an in-memory slot with the same
//! API, since no browser storage exists there.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(not(feature = "hydrate"))]
use std::sync::{Arc, Mutex};

/// Storage key used by the previous frontend; kept for compatibility so an
/// existing browser session survives the rollout.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// A single-slot store for the opaque session token.
///
/// At most one token exists at a time; `set` silently replaces any previous
/// value. All operations are synchronous and infallible from the caller's
/// perspective.
#[derive(Clone, Default)]
pub struct TokenStore {
    #[cfg(not(feature = "hydrate"))]
    slot: Arc<Mutex<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `token`, overwriting any existing value. The token is treated
    /// as an opaque string and is not validated.
    pub fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            *self.lock_slot() = Some(token.to_owned());
        }
    }

    /// The stored token, or `None` if nothing is stored. Never fails.
    pub fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.lock_slot().clone()
        }
    }

    /// Remove the stored token. Clearing an absent token is a no-op.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            *self.lock_slot() = None;
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
