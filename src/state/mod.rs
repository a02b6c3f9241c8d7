//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain Rust without reactive types, so it can be
//! exercised by native unit tests. Pages wrap these structs in `RwSignal`s.

pub mod auth;
pub mod comments;
pub mod find_account;
pub mod form;
pub mod login_flow;
pub mod mypage;
pub mod post_editor;
pub mod posts;
pub mod profile_edit;
pub mod session;
pub mod signup_flow;
