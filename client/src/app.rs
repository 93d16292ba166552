//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::login::LogInPage;
use crate::state::auth::{AuthContext, AuthStore};
use crate::state::toast::ToastState;

/// Cookie-backed store in the browser; an in-memory one while rendering on the server.
fn token_store() -> Arc<dyn AuthStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::state::auth::CookieAuthStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::state::auth::MemoryAuthStore::default())
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <link rel="stylesheet" href="/assets/fontawesome/css/all.min.css"/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing. The
/// login screen answers both `/` and `/login`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(token_store());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/monitoring.css"/>

        <Toaster/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LogInPage/>
                <Route path=StaticSegment("login") view=LogInPage/>
            </Routes>
        </Router>
    }
}
