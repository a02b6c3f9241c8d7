//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its request orchestration and hands the results to the
//! plain state types in `state`; rendering details live in `components`.

pub mod home;
pub mod login;
pub mod mypage;
pub mod post_detail;
pub mod post_editor;
pub mod profile_edit;
pub mod signup;
