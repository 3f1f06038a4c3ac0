//! Remote fault classification.
//!
//! JIRA reports rejected logins as a fault whose message is the Java exception
//! name followed by a detail text. Only one exact detail means "wrong username
//! or password"; everything else is an unexpected failure.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Detail text JIRA uses for a rejected username/password pair.
pub const INVALID_CREDENTIALS_DETAIL: &str = "Invalid username or password.";

static AUTHENTICATION_FAULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^com.atlassian.jira.rpc.exception.RemoteAuthenticationException: (.+)\n?$")
        .expect("valid regex")
});

/// A fault reported by the remote side of an RPC call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("remote fault: {message}")]
pub struct RemoteFault {
    /// Fault code, if the transport provides one.
    pub code: Option<String>,
    /// Fault message.
    pub message: String,
}

/// What kind of fault the remote side reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    /// Username or password was rejected.
    InvalidCredentials,
    /// An authentication exception with a detail other than invalid credentials.
    AuthenticationRejected {
        /// The detail text following the exception name.
        detail: String,
    },
    /// Any other fault.
    Unrecognized,
}

impl RemoteFault {
    /// Creates a fault with a message and no code.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Sets the fault code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Classifies the fault by its message. Matching is case-insensitive.
    #[must_use]
    pub fn classify(&self) -> FaultKind {
        let Some(captures) = AUTHENTICATION_FAULT.captures(&self.message) else {
            return FaultKind::Unrecognized;
        };
        let detail = captures.get(1).map_or("", |m| m.as_str());

        if detail.eq_ignore_ascii_case(INVALID_CREDENTIALS_DETAIL) {
            FaultKind::InvalidCredentials
        } else {
            FaultKind::AuthenticationRejected {
                detail: detail.to_string(),
            }
        }
    }
}
