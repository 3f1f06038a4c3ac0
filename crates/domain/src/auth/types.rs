//! Identity and authentication result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Outcome code of an authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthResult {
    /// The remote system accepted the credentials.
    AuthSuccess,
    /// The remote system does not know this username/credential pair.
    IdentityUnknown,
    /// Generic failure
    #[default]
    AuthFailure,
}

impl AuthResult {
    /// Returns true if the attempt succeeded.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::AuthSuccess)
    }

    /// Returns the constant name of this result code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthSuccess => "AUTH_SUCCESS",
            Self::IdentityUnknown => "IDENTITY_UNKNOWN",
            Self::AuthFailure => "AUTH_FAILURE",
        }
    }
}

impl fmt::Display for AuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes attached to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAttributes {
    /// The username the attempt was made with.
    pub username: String,
    /// Token returned by the remote login, if any.
    pub token: Option<String>,
}

/// Immutable result of an authentication attempt.
///
/// Created fresh by every `authenticate` call and handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    result: AuthResult,
    attributes: IdentityAttributes,
}

impl Identity {
    /// Creates a new identity.
    #[must_use]
    pub fn new(result: AuthResult, username: impl Into<String>, token: Option<String>) -> Self {
        Self {
            result,
            attributes: IdentityAttributes {
                username: username.into(),
                token,
            },
        }
    }

    /// The result code.
    #[must_use]
    pub const fn result(&self) -> AuthResult {
        self.result
    }

    /// Returns true if the result is `AUTH_SUCCESS`.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.result.is_success()
    }

    /// The username attribute.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.attributes.username
    }

    /// The token attribute.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.attributes.token.as_deref()
    }

    /// Attributes as a key/value map with the keys `username` and `token`.
    #[must_use]
    pub fn attributes(&self) -> BTreeMap<&'static str, Option<&str>> {
        BTreeMap::from([
            ("username", Some(self.attributes.username.as_str())),
            ("token", self.attributes.token.as_deref()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_result_is_failure() {
        assert_eq!(AuthResult::default(), AuthResult::AuthFailure);
        assert!(!AuthResult::default().is_success());
    }

    #[test]
    fn test_result_display() {
        assert_eq!(AuthResult::AuthSuccess.to_string(), "AUTH_SUCCESS");
        assert_eq!(AuthResult::IdentityUnknown.to_string(), "IDENTITY_UNKNOWN");
        assert_eq!(AuthResult::AuthFailure.to_string(), "AUTH_FAILURE");
    }

    #[test]
    fn test_identity_attributes_map() {
        let identity = Identity::new(AuthResult::AuthSuccess, "alice", Some("tok".to_string()));
        let attrs = identity.attributes();

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["username"], Some("alice"));
        assert_eq!(attrs["token"], Some("tok"));
        assert!(identity.is_authenticated());
    }

    #[test]
    fn test_identity_without_token() {
        let identity = Identity::new(AuthResult::IdentityUnknown, "bob", None);

        assert_eq!(identity.token(), None);
        assert_eq!(identity.attributes()["token"], None);
        assert!(!identity.is_authenticated());
    }

    #[test]
    fn test_identity_serializes_constant_names() {
        let identity = Identity::new(AuthResult::IdentityUnknown, "bob", None);
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "result": "IDENTITY_UNKNOWN",
                "attributes": { "username": "bob", "token": null }
            })
        );
    }
}
