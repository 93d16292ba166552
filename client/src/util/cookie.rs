//! Browser cookie access via `document.cookie`.
//!
//! Values are percent-encoded with the `cookie` crate and scoped to `/`.
//! Outside the browser (SSR, native tests) reads return `None` and writes
//! are no-ops; the string builders stay pure so they can be tested anywhere.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::Cookie;

/// `Set-Cookie`-style string for `name=value; Path=/`.
pub fn encode_cookie(name: &str, value: &str) -> String {
    Cookie::build((name, value)).path("/").build().encoded().to_string()
}

/// Find `name` in a `document.cookie` style header (`a=1; b=2`).
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Read a cookie value from the current document.
pub fn read(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = html_document()?.cookie().ok()?;
        find_cookie(&header, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Write a path-wide cookie on the current document.
pub fn write(name: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(&encode_cookie(name, value)).is_err() {
                leptos::logging::warn!("failed to write cookie {name}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value);
    }
}

