//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs, clocks) and
//! pure rules (validation, formatting, file checks) from page logic.

pub mod auth;
pub mod dialog;
pub mod files;
pub mod format;
pub mod storage;
pub mod validation;
