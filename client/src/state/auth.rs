//! Auth-session state and the token store behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every token the client acquires goes through `AuthStore::set_token`. A
//! normal login also marks the session as authenticated in `AuthState`; the
//! conflict path only persists the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::util::cookie;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Persistence capability for the session token.
pub trait AuthStore: Send + Sync {
    fn set_token(&self, token: &str);
    fn token(&self) -> Option<String>;
}

/// Token store backed by the `token` browser cookie.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieAuthStore;

impl AuthStore for CookieAuthStore {
    fn set_token(&self, token: &str) {
        cookie::write(TOKEN_COOKIE, token);
    }

    fn token(&self) -> Option<String> {
        cookie::read(TOKEN_COOKIE)
    }
}

/// In-process token store for server rendering, where no document exists.
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    token: Mutex<Option<String>>,
}

impl AuthStore for MemoryAuthStore {
    fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }
}

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Token of the authenticated session, if any.
    pub token: Option<String>,
    /// Raised while a login request is in flight.
    pub is_refresh: bool,
}

/// Persist `token` and mark `state` as authenticated.
pub fn login_with(store: &dyn AuthStore, state: &mut AuthState, token: &str) {
    store.set_token(token);
    state.token = Some(token.to_owned());
}

/// App-wide auth handle provided through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: StoredValue<Arc<dyn AuthStore>>,
}

impl AuthContext {
    /// Build the context, seeding the session from any token already stored.
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        let initial = AuthState { token: store.token(), is_refresh: false };
        Self { state: RwSignal::new(initial), store: StoredValue::new(store) }
    }

    /// Whether a normal login has completed in this session.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|state| state.token.is_some())
    }

    /// Whether a login request is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.state.with(|state| state.is_refresh)
    }

    /// Normal login: store the token and mark the session authenticated.
    pub fn login(&self, token: &str) {
        self.store.with_value(|store| {
            self.state.update(|state| login_with(store.as_ref(), state, token));
        });
    }

    /// Store a token without touching the session state.
    pub fn persist_token(&self, token: &str) {
        self.store.with_value(|store| store.set_token(token));
    }

    pub fn set_refreshing(&self, refreshing: bool) {
        self.state.try_update(|state| state.is_refresh = refreshing);
    }
}
