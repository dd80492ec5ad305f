//! Networking modules for the admin HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the wire schema shared
//! with the server's surcharge routes.

pub mod api;
pub mod types;
