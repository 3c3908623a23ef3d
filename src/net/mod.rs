//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and failure classification; `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
