//! Networking modules for the login REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the request and classifies the response, and `types`
//! defines the wire schema shared with the monitoring backend.

pub mod api;
pub mod types;
