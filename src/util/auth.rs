//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes must apply identical redirect behavior, and must not
//! redirect before the persisted session has been read. The decision is a
//! pure function so the route components stay thin.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Requires a session.
    Protected,
    /// Only for anonymous visitors (login, signup).
    PublicOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Render,
    Redirect(&'static str),
}

pub fn guard_decision(state: &AuthState, kind: GuardKind) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match (kind, state.is_authenticated()) {
        (GuardKind::Protected, true) | (GuardKind::PublicOnly, false) => GuardDecision::Render,
        (GuardKind::Protected, false) => GuardDecision::Redirect(LOGIN_PATH),
        (GuardKind::PublicOnly, true) => GuardDecision::Redirect(HOME_PATH),
    }
}
