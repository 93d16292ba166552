//! Same-origin forwarding of `/api/*` to the monitoring backend.
//!
//! The browser bundle posts to `/api/login`; this handler relays the request
//! to `{MONITORING_API_URL}/login` and returns the upstream status and body
//! untouched, so 400/409 payloads reach the login form as the backend wrote
//! them. Only allowlisted headers cross in either direction.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers relayed from the browser to the backend.
pub(crate) fn request_headers() -> [HeaderName; 4] {
    [header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE, header::COOKIE]
}

/// Headers relayed from the backend back to the browser.
pub(crate) fn response_headers() -> [HeaderName; 3] {
    [header::CACHE_CONTROL, header::CONTENT_TYPE, header::SET_COOKIE]
}

/// Upstream URL for `path` (and optional raw query) under `base`.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Copy the allowlisted headers from `source`, keeping repeated values.
pub(crate) fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}` — forward to the monitoring backend.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.config.api_url, &path, query.as_deref());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &request_headers()))
        .body(body)
        .send()
        .await;

    let upstream = match upstream {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream.status();
    let relayed = filter_headers(upstream.headers(), &response_headers());
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "upstream body read failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
    let mut response = (status, bytes).into_response();
    response.headers_mut().extend(relayed);
    response
}
