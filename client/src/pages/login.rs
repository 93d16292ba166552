//! Login page: branding, credential form, and sign-up link.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginForm` owns the form signal and the in-flight request. The request
//! runs inside the form's `TaskScope`, which is cancelled on unmount so a
//! late response never writes into a disposed form. The auth context's
//! refresh flag outlives the form, so unmount lowers it as well.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::background::Background;
use crate::components::input_field::InputField;
use crate::components::toaster::show_toast;
use crate::state::auth::AuthContext;
use crate::state::login_form::{FieldDescriptor, FormEffect, LoginFormState, login_fields, submit_label};
use crate::state::toast::ToastState;
use crate::util::task::TaskScope;

pub const LOGIN_DOCUMENT_TITLE: &str = "Computer Monitoring - Login";

/// Carry out the effect produced by a finished login request.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn apply_effect(effect: FormEffect, auth: AuthContext, toasts: RwSignal<ToastState>) {
    match effect {
        FormEffect::Login(token) => auth.login(&token),
        FormEffect::PersistToken(token) => auth.persist_token(&token),
        FormEffect::Toast(message) => show_toast(toasts, toast_message(message)),
        FormEffect::Log(reason) => leptos::logging::error!("{reason}"),
    }
}

/// Abort the in-flight request and lower the refresh flag it raised.
fn release_request(tasks: &TaskScope, auth: AuthContext) {
    tasks.cancel_all();
    auth.set_refreshing(false);
}

/// Toast title for a validation failure; blank server messages get a fallback.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn toast_message(message: String) -> String {
    if message.trim().is_empty() { "Login failed. Check the highlighted fields.".to_owned() } else { message }
}

/// Credential form driven by the given field descriptors.
#[component]
pub fn LoginForm(fields: Vec<FieldDescriptor>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(LoginFormState::new(fields.len()));

    let tasks = TaskScope::new();
    on_cleanup({
        let tasks = tasks.clone();
        move || release_request(&tasks, auth)
    });

    let request_fields = fields.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(LoginFormState::begin_submit).unwrap_or(false) {
            return;
        }
        let request = form.with_untracked(|state| state.credentials(&request_fields));
        auth.set_refreshing(true);

        #[cfg(feature = "hydrate")]
        {
            let task = tasks.wrap(async move {
                let outcome = crate::net::api::login(&request).await;
                auth.set_refreshing(false);
                if let Some(effect) = form.try_update(|state| state.finish(outcome)) {
                    apply_effect(effect, auth, toasts);
                }
            });
            leptos::task::spawn_local(async move {
                let _ = task.await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &tasks, toasts);
        }
    };

    let inputs = fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let value = Signal::derive(move || form.with(|state| state.value(index).to_owned()));
            let error_message = Signal::derive(move || form.with(|state| state.error_for(field.key).to_owned()));
            let on_input = Callback::new(move |value: String| form.update(|state| state.handle_change(index, value)));
            view! { <InputField field=field value=value error_message=error_message on_input=on_input/> }
        })
        .collect_view();

    let loading = move || form.with(|state| state.loading);

    view! {
        <form class="login-form" on:submit=on_submit>
            {inputs}
            <Show when=move || form.with(|state| !state.success.is_empty())>
                <div class="login-form__success">{move || form.with(|state| state.success.clone())}</div>
            </Show>
            <div class="login-form__actions">
                <a href="/forgot" class="login-link">
                    "Forgot Password?"
                </a>
                <button class="login-button" type="submit" disabled=loading>
                    {move || submit_label(loading())}
                </button>
            </div>
        </form>
    }
}

/// Login page shell. Sets the document title once through `leptos_meta`.
#[component]
pub fn LogInPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let busy = move || if auth.is_refreshing() { "true" } else { "false" };

    view! {
        <Title text=LOGIN_DOCUMENT_TITLE/>
        <div class="login-page" aria-busy=busy>
            <Background/>
            <div class="login-page__content">
                <img src="/assets/smct.png" alt="SMCT Logo" class="login-page__logo"/>
                <h1 class="login-page__system">"COMPUTER MONITORING SYSTEM"</h1>
                <h1 class="login-page__title">"Log In"</h1>
                <LoginForm fields=login_fields()/>
                <p class="login-page__signup">
                    "Don't have an account yet? "
                    <a href="/signup" class="login-link login-link--strong">
                        "Sign Up"
                    </a>
                </p>
            </div>
        </div>
    }
}
