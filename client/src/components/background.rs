//! Decorative page backdrop: background image under a white veil.

use leptos::prelude::*;

#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div class="login-background" aria-hidden="true">
            <div class="login-background__veil"></div>
        </div>
    }
}
