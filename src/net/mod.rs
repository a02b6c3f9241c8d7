//! Networking modules for the board REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` describes each call as data, `api` executes them over HTTP,
//! `types` defines the JSON schema, and `error` the transport failure type.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod types;
