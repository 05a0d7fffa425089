//! Backend identifiers.
//!
//! Identifiers are minted by the device backend and treated as opaque here:
//! they are read out of collection items and interpolated into dispatch
//! routes, never generated or interpreted.

use serde_json::Value;

/// Opaque identifier of a backend entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackendId(String);

impl BackendId {
    /// Build an identifier from a raw JSON field value.
    ///
    /// The backend uses numeric ids today; strings are accepted to stay
    /// agnostic. Anything else is not an identifier.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) => Some(Self(s.clone())),
            _ => None,
        }
    }

    /// The identifier as a path segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BackendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BackendId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
