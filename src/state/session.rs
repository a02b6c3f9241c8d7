//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by the root component and shared through
//! context. It owns the in-memory `AuthState`, writes every change through to
//! durable storage before notifying subscribers, and reads the persisted
//! record exactly once in `initialize()`.
//!
//! LIFECYCLE
//! =========
//! `new` (loading) -> `initialize` (session restored or anonymous) ->
//! `login` / `update_profile` / `logout` mutations, each followed by a
//! snapshot broadcast to every subscriber.
//!
//! PERSISTENCE FAILURES
//! ====================
//! Memory always follows the mutation, even when the write to storage fails;
//! a failed login write only costs the session on reload. A logout whose
//! removal is refused overwrites the record with `null` instead, which
//! `initialize` reads as anonymous.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use leptos::logging::warn;

use super::auth::{AuthState, ProfileUpdate, Session};
use crate::net::error::ApiError;
use crate::net::types::{LoginResponse, non_blank};
use crate::util::storage::SessionStorage;

/// Storage key of the persisted session record.
pub const SESSION_KEY: &str = "user";
/// Record written when the session record cannot be removed.
const LOGGED_OUT_RECORD: &str = "null";
/// Message shown when login fails without a backend explanation.
pub const LOGIN_FAILED_MESSAGE: &str = "로그인에 실패했습니다.";

/// Credential exchange with the backend.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// # Errors
    ///
    /// Returns an error when the request cannot be completed.
    async fn login(&self, user_id: &str, password: &str) -> Result<LoginResponse, ApiError>;
}

/// Result of [`SessionStore::login`]. Never an error: transport failures are
/// folded into a failed outcome with a generic message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl LoginOutcome {
    fn succeeded() -> Self {
        Self { success: true, message: None }
    }

    fn failed(message: Option<&str>) -> Self {
        Self { success: false, message: Some(non_blank(message).unwrap_or(LOGIN_FAILED_MESSAGE).to_owned()) }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&AuthState) + Send + Sync>;

/// Owned session store with write-through persistence.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    state: RwLock<AuthState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a store in the loading state. Nothing is read until `initialize`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: RwLock::new(AuthState::default()),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Restore the persisted session. Only the first call reads storage.
    pub fn initialize(&self) {
        if !self.snapshot().loading {
            return;
        }
        let session = self
            .storage
            .load(SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok())
            .filter(Session::is_valid);
        self.set_state(AuthState { session, loading: false });
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> AuthState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.snapshot().session
    }

    /// Exchange credentials through `gateway` and, on success, persist the
    /// new session. A failure leaves the current session untouched.
    pub async fn login<G: AuthGateway>(&self, gateway: &G, user_id: &str, password: &str) -> LoginOutcome {
        match gateway.login(user_id, password).await {
            Ok(resp) if resp.success != Some(false) => {
                let session = Session {
                    user_id: non_blank(resp.user_id.as_deref()).unwrap_or(user_id).to_owned(),
                    name: resp.name.unwrap_or_default(),
                    email: resp.email.unwrap_or_default(),
                };
                self.commit(Some(session));
                LoginOutcome::succeeded()
            }
            Ok(resp) => LoginOutcome::failed(resp.message.as_deref()),
            Err(e) => {
                warn!("login request failed: {e}");
                LoginOutcome::failed(None)
            }
        }
    }

    /// Clear the session and delete the persisted record.
    pub fn logout(&self) {
        self.commit(None);
    }

    /// Merge profile fields into the current session. No-op when logged out.
    pub fn update_profile(&self, update: &ProfileUpdate) {
        let Some(mut session) = self.session() else {
            return;
        };
        update.apply(&mut session);
        self.commit(Some(session));
    }

    /// Register `listener`; it receives a snapshot after every state change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner).push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner).retain(|(lid, _)| *lid != id);
    }

    /// Write `session` through to storage, then memory, then subscribers.
    fn commit(&self, session: Option<Session>) {
        let written = match &session {
            Some(s) => serde_json::to_string(s)
                .map_err(|e| e.to_string())
                .and_then(|raw| self.storage.save(SESSION_KEY, &raw).map_err(|e| e.to_string())),
            None => self
                .storage
                .remove(SESSION_KEY)
                .or_else(|_| self.storage.save(SESSION_KEY, LOGGED_OUT_RECORD))
                .map_err(|e| e.to_string()),
        };
        if let Err(e) = written {
            warn!("session record not persisted: {e}");
        }
        self.set_state(AuthState { session, loading: false });
    }

    fn set_state(&self, next: AuthState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in listeners.iter() {
            listener(&next);
        }
    }
}
