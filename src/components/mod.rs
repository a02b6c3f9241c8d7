//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session through the `RwSignal<AuthState>` context and
//! keep their own request state local; pages compose them per route.

pub mod comment_section;
pub mod file_uploader;
pub mod find_account_modal;
pub mod form_field;
pub mod guard;
pub mod header;
pub mod post_card;
pub mod status;
