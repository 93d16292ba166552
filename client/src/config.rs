//! Compile-time client configuration.
//!
//! The API base is baked into the WASM bundle from `MONITORING_API_BASE`.
//! The default `/api` prefix is forwarded to the monitoring backend by the
//! host server, so the browser only ever talks to its own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";

/// Base URL for REST calls, without a trailing slash requirement.
pub fn api_base() -> &'static str {
    option_env!("MONITORING_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join `path` onto `base` with exactly one separating slash.
pub fn api_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Full URL of the credential login endpoint.
pub fn login_endpoint() -> String {
    api_endpoint(api_base(), "login")
}
