//! Routed screens. `/` and `/login` both render `login::LogInPage`.

pub mod login;
