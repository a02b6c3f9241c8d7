//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the snapshot route guards and user-aware components read.
//! It is produced by `state::session::SessionStore` and mirrored into an
//! `RwSignal<AuthState>` context by the root component.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// The authenticated identity. Persisted as JSON under the `user` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Session {
    /// A persisted record is only usable if it carries a user id.
    pub fn is_valid(&self) -> bool {
        !self.user_id.trim().is_empty()
    }
}

/// Authentication state tracking the current session and loading status.
///
/// `loading` stays true until the persisted record has been read once, so
/// guards can tell "not yet known" apart from "anonymous".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Logged-in user id, if any.
    pub fn user_id(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.user_id.clone())
    }
}

/// Fields replaced by a profile edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Merge the provided fields into `session`.
    pub fn apply(&self, session: &mut Session) {
        if let Some(name) = &self.name {
            session.name.clone_from(name);
        }
        if let Some(email) = &self.email {
            session.email.clone_from(email);
        }
    }
}
