use super::*;

// =============================================================
// LoginRequest
// =============================================================

#[test]
fn login_request_serializes_wire_field_names() {
    let request = LoginRequest { username_or_email: "ana@smct.ph".to_owned(), password: "hunter22".to_owned() };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({"username_or_email": "ana@smct.ph", "password": "hunter22"}));
}

#[test]
fn field_key_wire_names_match_serde() {
    for key in [FieldKey::UsernameOrEmail, FieldKey::Password] {
        let json = serde_json::to_value(key).unwrap();
        assert_eq!(json, serde_json::Value::String(key.as_str().to_owned()));
    }
}

// =============================================================
// ValidationFailure
// =============================================================

#[test]
fn validation_failure_reads_message_and_password_error() {
    let body: ValidationFailure =
        serde_json::from_str(r#"{"message":"Invalid input","errors":{"password":"too short"}}"#).unwrap();
    assert_eq!(body.message, "Invalid input");
    assert_eq!(body.errors.password.as_deref(), Some("too short"));
    assert_eq!(body.errors.username_or_email, None);
}

#[test]
fn validation_failure_without_errors_defaults_empty() {
    let body: ValidationFailure = serde_json::from_str(r#"{"message":"Bad request"}"#).unwrap();
    assert_eq!(body.errors, FieldErrors::default());
}

#[test]
fn validation_failure_null_errors_defaults_empty() {
    let body: ValidationFailure = serde_json::from_str(r#"{"message":"Bad request","errors":null}"#).unwrap();
    assert!(body.errors.into_map().is_empty());
}

#[test]
fn field_error_lists_are_joined() {
    let errors: FieldErrors =
        serde_json::from_str(r#"{"username_or_email":["is required.","must be an email."]}"#).unwrap();
    assert_eq!(errors.username_or_email.as_deref(), Some("is required. must be an email."));
}

#[test]
fn unknown_error_keys_are_ignored() {
    let errors: FieldErrors = serde_json::from_str(r#"{"captcha":"missing","password":"wrong"}"#).unwrap();
    let map = errors.into_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&FieldKey::Password).map(String::as_str), Some("wrong"));
}

#[test]
fn non_string_error_is_rejected() {
    let result = serde_json::from_str::<FieldErrors>(r#"{"password":42}"#);
    assert!(result.is_err());
}

#[test]
fn into_map_skips_blank_messages() {
    let errors = FieldErrors { username_or_email: Some(String::new()), password: Some("too short".to_owned()) };
    let map = errors.into_map();
    assert!(!map.contains_key(&FieldKey::UsernameOrEmail));
    assert_eq!(map.get(&FieldKey::Password).map(String::as_str), Some("too short"));
}
