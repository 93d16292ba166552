//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `login_form`, `toast`) so components
//! depend on small focused models. Each model is plain data wrapped in an
//! `RwSignal` by whoever owns it.

pub mod auth;
pub mod login_form;
pub mod toast;
