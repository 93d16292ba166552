//! Top-right toast stack with auto-dismiss and a close button.

use leptos::prelude::*;

use crate::state::toast::{TOAST_TIMEOUT_MS, Toast, ToastState};

/// Push an error toast and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, message: String) {
    let Some(id) = toasts.try_update(|state| state.push(message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TIMEOUT_MS)).await;
        toasts.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders every toast in the shared `ToastState` context.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let progress_style = format!("animation-duration: {TOAST_TIMEOUT_MS}ms");

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast--error" role="alert">
                            <span class="toast__icon">"!"</span>
                            <span class="toast__title">{toast.message}</span>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="Close"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                            <div class="toast__progress" style=progress_style.clone()></div>
                        </div>
                    }
                }
            />
        </div>
    }
}
