//! Wire DTOs for the login endpoint.
//!
//! DESIGN
//! ======
//! Response bodies are decoded per status code, so each status gets its own
//! small struct. Field keys form a closed enum; anything the server reports
//! for an unknown key is dropped at the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Credential field understood by the login endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    UsernameOrEmail,
    Password,
}

impl FieldKey {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UsernameOrEmail => "username_or_email",
            Self::Password => "password",
        }
    }
}

/// `POST /login` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Body shared by the 200 and 409 responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

/// Body of a 400 response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationFailure {
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_nullable_errors")]
    pub errors: FieldErrors,
}

/// Per-field validation messages from a 400 response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldErrors {
    #[serde(default, deserialize_with = "deserialize_error_text")]
    pub username_or_email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_error_text")]
    pub password: Option<String>,
}

impl FieldErrors {
    /// Collapse into a key -> message map, skipping absent and blank entries.
    pub fn into_map(self) -> BTreeMap<FieldKey, String> {
        [
            (FieldKey::UsernameOrEmail, self.username_or_email),
            (FieldKey::Password, self.password),
        ]
        .into_iter()
        .filter_map(|(key, message)| message.filter(|m| !m.is_empty()).map(|m| (key, m)))
        .collect()
    }
}

/// Classified result of one login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 200: credentials accepted.
    Authenticated { token: String },
    /// 409: the server answered with a token outside the normal login path.
    Conflict { token: String },
    /// 400: validation failure with a summary and per-field messages.
    Rejected { message: String, errors: FieldErrors },
    /// Any other status, a transport failure, or an undecodable body.
    Failed(String),
}

fn deserialize_nullable_errors<'de, D>(deserializer: D) -> Result<FieldErrors, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FieldErrors>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept either `"msg"` or `["msg", ...]`; lists are joined with a space.
fn deserialize_error_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(text) => Ok(text),
                    other => Err(D::Error::custom(format!("expected error string, got {other}"))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(parts.join(" ")))
        }
        other => Err(D::Error::custom(format!("expected error string or list, got {other}"))),
    }
}
