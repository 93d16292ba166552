use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push("Invalid credentials");
    let second = state.push("Try again");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Invalid credentials");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push("one");
    let second = state.push("two");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push("one");
    state.dismiss(first);
    let second = state.push("two");
    assert_ne!(first, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push("one");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}
