//! Single labeled input with inline error text.

use leptos::prelude::*;

use crate::state::login_form::FieldDescriptor;

/// Presentational input bound to parent-held state.
///
/// The label doubles as placeholder. A non-empty `error_message` switches the
/// input to its error style and shows the message under it, indented past an
/// invisible copy of the icon so the text lines up with the input.
#[component]
pub fn InputField(
    field: FieldDescriptor,
    value: Signal<String>,
    error_message: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let has_error = move || !error_message.get().is_empty();
    let input_class = move || if has_error() { "login-input login-input--error" } else { "login-input" };
    let icon_class = field.icon.class();

    view! {
        <div class="login-field">
            <div class="login-field__row">
                <span class="login-field__icon">
                    <i class=icon_class></i>
                </span>
                <input
                    class=input_class
                    type=field.input_type()
                    placeholder=field.label
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
            <Show when=has_error>
                <div class="login-field__row">
                    <span class="login-field__icon login-field__icon--spacer">
                        <i class=icon_class></i>
                    </span>
                    <span class="login-field__error">{move || error_message.get()}</span>
                </div>
            </Show>
        </div>
    }
}
