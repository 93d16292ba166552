use super::*;
use crate::net::types::FieldErrors;

fn typed(values: &[&str]) -> LoginFormState {
    let mut state = LoginFormState::new(values.len());
    for (index, value) in values.iter().enumerate() {
        state.handle_change(index, (*value).to_owned());
    }
    state
}

// =============================================================
// Field descriptors
// =============================================================

#[test]
fn login_fields_cover_both_credentials_in_order() {
    let fields = login_fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].key, FieldKey::UsernameOrEmail);
    assert_eq!(fields[0].label, "Username/Email");
    assert_eq!(fields[1].key, FieldKey::Password);
    assert_eq!(fields[1].label, "Password");
}

#[test]
fn only_password_field_is_masked() {
    let fields = login_fields();
    assert_eq!(fields[0].input_type(), "text");
    assert_eq!(fields[1].input_type(), "password");
}

#[test]
fn field_icons_match_fields() {
    let fields = login_fields();
    assert_eq!(fields[0].icon, FieldIcon::User);
    assert_eq!(fields[1].icon.class(), "fa-solid fa-lock");
}

// =============================================================
// Editing
// =============================================================

#[test]
fn new_state_has_one_blank_value_per_field() {
    let state = LoginFormState::new(login_fields().len());
    assert_eq!(state.values, vec![String::new(), String::new()]);
    assert!(!state.loading);
    assert!(state.success.is_empty());
    assert!(state.errors.is_empty());
}

#[test]
fn values_track_keystrokes_per_index() {
    let mut state = LoginFormState::new(2);
    state.handle_change(0, "a".to_owned());
    state.handle_change(1, "s".to_owned());
    state.handle_change(0, "an".to_owned());
    state.handle_change(1, "se".to_owned());
    state.handle_change(0, "ana".to_owned());
    assert_eq!(state.value(0), "ana");
    assert_eq!(state.value(1), "se");
    assert_eq!(state.values.len(), 2);
}

#[test]
fn out_of_range_change_is_ignored() {
    let mut state = LoginFormState::new(2);
    state.handle_change(5, "oops".to_owned());
    assert_eq!(state.values.len(), 2);
    assert_eq!(state.value(5), "");
}

#[test]
fn credentials_pick_values_by_field_key() {
    let state = typed(&["ana@smct.ph", "hunter22"]);
    let request = state.credentials(&login_fields());
    assert_eq!(request.username_or_email, "ana@smct.ph");
    assert_eq!(request.password, "hunter22");
}

#[test]
fn credentials_follow_descriptor_order() {
    let mut fields = login_fields();
    fields.reverse();
    let state = typed(&["hunter22", "ana@smct.ph"]);
    let request = state.credentials(&fields);
    assert_eq!(request.username_or_email, "ana@smct.ph");
    assert_eq!(request.password, "hunter22");
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_sets_loading_and_pending_label() {
    let mut state = typed(&["ana", "pw"]);
    assert!(state.begin_submit());
    assert!(state.loading);
    assert_eq!(submit_label(state.loading), "Logging In...");
}

#[test]
fn begin_submit_refuses_while_in_flight() {
    let mut state = typed(&["ana", "pw"]);
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
    assert!(state.loading);
}

#[test]
fn idle_label_is_log_in() {
    assert_eq!(submit_label(false), "LOG IN");
}

#[test]
fn ok_response_sets_success_and_requests_login() {
    let mut state = typed(&["ana", "pw"]);
    state.begin_submit();
    let effect = state.finish(LoginOutcome::Authenticated { token: "abc".to_owned() });
    assert_eq!(effect, FormEffect::Login("abc".to_owned()));
    assert_eq!(state.success, LOGIN_SUCCESS_MESSAGE);
    assert!(!state.loading);
}

#[test]
fn conflict_persists_token_without_login_or_feedback() {
    let mut state = typed(&["ana", "pw"]);
    state.begin_submit();
    let effect = state.finish(LoginOutcome::Conflict { token: "xyz".to_owned() });
    assert_eq!(effect, FormEffect::PersistToken("xyz".to_owned()));
    assert!(state.success.is_empty());
    assert!(state.errors.is_empty());
    assert!(!state.loading);
}

#[test]
fn validation_failure_sets_field_errors_and_toast() {
    let mut state = typed(&["ana", "pw"]);
    state.begin_submit();
    let errors = FieldErrors { username_or_email: None, password: Some("too short".to_owned()) };
    let effect = state.finish(LoginOutcome::Rejected { message: "Invalid input".to_owned(), errors });
    assert_eq!(effect, FormEffect::Toast("Invalid input".to_owned()));
    assert_eq!(state.error_for(FieldKey::Password), "too short");
    assert_eq!(state.error_for(FieldKey::UsernameOrEmail), "");
    assert!(!state.loading);
}

#[test]
fn validation_failure_replaces_previous_errors() {
    let mut state = typed(&["", ""]);
    state.begin_submit();
    let first = FieldErrors { username_or_email: Some("required".to_owned()), password: Some("required".to_owned()) };
    state.finish(LoginOutcome::Rejected { message: "Invalid input".to_owned(), errors: first });
    state.begin_submit();
    let second = FieldErrors { username_or_email: None, password: Some("too short".to_owned()) };
    state.finish(LoginOutcome::Rejected { message: "Invalid input".to_owned(), errors: second });
    assert_eq!(state.error_for(FieldKey::UsernameOrEmail), "");
    assert_eq!(state.error_for(FieldKey::Password), "too short");
}

#[test]
fn unclassified_failure_only_logs_and_reenables() {
    let mut state = typed(&["ana", "pw"]);
    state.begin_submit();
    let before = state.errors.clone();
    let effect = state.finish(LoginOutcome::Failed("login failed: unexpected status 500".to_owned()));
    assert!(matches!(effect, FormEffect::Log(_)));
    assert_eq!(state.errors, before);
    assert!(state.success.is_empty());
    assert!(!state.loading);
    assert_eq!(submit_label(state.loading), "LOG IN");
}
