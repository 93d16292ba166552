//! REST helper for the credential login endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning a failed outcome since logging in is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every path produces a `LoginOutcome`; transport and decode failures become
//! `LoginOutcome::Failed` instead of panics so the form can always re-enable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginOutcome, LoginRequest, TokenBody, ValidationFailure};

fn unexpected_status_message(status: u16) -> String {
    format!("login failed: unexpected status {status}")
}

fn malformed_body_message(status: u16, err: &serde_json::Error) -> String {
    format!("login failed: malformed {status} response: {err}")
}

/// Map an HTTP status and raw body onto the login outcome taxonomy.
pub fn classify_login_response(status: u16, body: &str) -> LoginOutcome {
    match status {
        200 => match serde_json::from_str::<TokenBody>(body) {
            Ok(body) => LoginOutcome::Authenticated { token: body.token },
            Err(e) => LoginOutcome::Failed(malformed_body_message(status, &e)),
        },
        409 => match serde_json::from_str::<TokenBody>(body) {
            Ok(body) => LoginOutcome::Conflict { token: body.token },
            Err(e) => LoginOutcome::Failed(malformed_body_message(status, &e)),
        },
        400 => match serde_json::from_str::<ValidationFailure>(body) {
            Ok(body) => LoginOutcome::Rejected { message: body.message, errors: body.errors },
            Err(e) => LoginOutcome::Failed(malformed_body_message(status, &e)),
        },
        other => LoginOutcome::Failed(unexpected_status_message(other)),
    }
}

/// Submit credentials via `POST {api_base}/login`.
pub async fn login(request: &LoginRequest) -> LoginOutcome {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::login_endpoint();
        let pending = match gloo_net::http::Request::post(&url).json(request) {
            Ok(pending) => pending,
            Err(e) => return LoginOutcome::Failed(e.to_string()),
        };
        let resp = match pending.send().await {
            Ok(resp) => resp,
            Err(e) => return LoginOutcome::Failed(e.to_string()),
        };
        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => return LoginOutcome::Failed(e.to_string()),
        };
        classify_login_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        LoginOutcome::Failed("not available on server".to_owned())
    }
}
