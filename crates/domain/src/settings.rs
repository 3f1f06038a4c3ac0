//! Remote client settings
//!
//! Describes how the SOAP client reaches a JIRA installation.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Default path of the JIRA SOAP service, relative to the installation URL.
pub const DEFAULT_SOAP_PATH: &str = "/rpc/soap/jirasoapservice-v2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for connecting to a JIRA installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// URL of the JIRA installation.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Path of the SOAP service below `endpoint`.
    pub soap_path: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("jira-auth/{}", env!("CARGO_PKG_VERSION")),
            soap_path: DEFAULT_SOAP_PATH.to_string(),
        }
    }
}

impl ClientSettings {
    /// Creates settings for the given endpoint with defaults for everything else.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSettings` if the endpoint is empty
    /// or the timeout is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(DomainError::InvalidSettings(
                "endpoint cannot be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(DomainError::InvalidSettings(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
