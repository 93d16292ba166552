//! Login form model: field descriptors, input values, and response handling.
//!
//! DESIGN
//! ======
//! The form lives in one `RwSignal<LoginFormState>` owned by `LoginForm`.
//! `finish` folds a `LoginOutcome` into the state and hands back the single
//! side effect the component must perform, keeping the status branching
//! testable without a browser.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use std::collections::BTreeMap;

use crate::net::types::{FieldKey, LoginOutcome, LoginRequest};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const SUBMIT_LABEL: &str = "LOG IN";
pub const SUBMIT_PENDING_LABEL: &str = "Logging In...";

/// Icon shown next to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIcon {
    User,
    Lock,
}

impl FieldIcon {
    pub fn class(self) -> &'static str {
        match self {
            Self::User => "fa-solid fa-user",
            Self::Lock => "fa-solid fa-lock",
        }
    }
}

/// Static description of one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub icon: FieldIcon,
    pub label: &'static str,
    pub key: FieldKey,
}

impl FieldDescriptor {
    /// HTML input type; the password field is masked.
    pub fn input_type(&self) -> &'static str {
        match self.key {
            FieldKey::Password => "password",
            FieldKey::UsernameOrEmail => "text",
        }
    }
}

/// Fields rendered by the login page, in display order.
pub fn login_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor { icon: FieldIcon::User, label: "Username/Email", key: FieldKey::UsernameOrEmail },
        FieldDescriptor { icon: FieldIcon::Lock, label: "Password", key: FieldKey::Password },
    ]
}

/// Side effect requested by `LoginFormState::finish`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEffect {
    /// Hand the token to the auth context's login procedure.
    Login(String),
    /// Persist the token without logging in.
    PersistToken(String),
    /// Raise an error toast.
    Toast(String),
    /// Console log only.
    Log(String),
}

/// Mutable form state; `values` is indexed like the field descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub values: Vec<String>,
    pub loading: bool,
    pub success: String,
    pub errors: BTreeMap<FieldKey, String>,
}

impl LoginFormState {
    /// Empty state with one blank value per field.
    pub fn new(field_count: usize) -> Self {
        Self { values: vec![String::new(); field_count], ..Self::default() }
    }

    /// Replace the value at `index`. Out-of-range indices are ignored.
    pub fn handle_change(&mut self, index: usize, value: String) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map_or("", String::as_str)
    }

    /// Error text for `key`, empty when the field is valid.
    pub fn error_for(&self, key: FieldKey) -> &str {
        self.errors.get(&key).map_or("", String::as_str)
    }

    /// Request body built from the values of the credential fields.
    pub fn credentials(&self, fields: &[FieldDescriptor]) -> LoginRequest {
        let value_of = |key: FieldKey| {
            fields
                .iter()
                .position(|field| field.key == key)
                .map(|index| self.value(index).to_owned())
                .unwrap_or_default()
        };
        LoginRequest { username_or_email: value_of(FieldKey::UsernameOrEmail), password: value_of(FieldKey::Password) }
    }

    /// Enter the loading state. Returns `false` if a request is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a finished request and return the follow-up effect.
    pub fn finish(&mut self, outcome: LoginOutcome) -> FormEffect {
        self.loading = false;
        match outcome {
            LoginOutcome::Authenticated { token } => {
                self.success = LOGIN_SUCCESS_MESSAGE.to_owned();
                FormEffect::Login(token)
            }
            LoginOutcome::Conflict { token } => FormEffect::PersistToken(token),
            LoginOutcome::Rejected { message, errors } => {
                self.errors = errors.into_map();
                FormEffect::Toast(message)
            }
            LoginOutcome::Failed(reason) => FormEffect::Log(reason),
        }
    }
}

/// Submit button caption for the current loading flag.
pub fn submit_label(loading: bool) -> &'static str {
    if loading { SUBMIT_PENDING_LABEL } else { SUBMIT_LABEL }
}
