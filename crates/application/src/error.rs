//! Application error types

use jira_auth_domain::DomainError;
use thiserror::Error;

use crate::ports::RemoteClientError;

/// Errors returned by an authentication adapter.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Username or credential was missing. No remote call was made.
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    /// The remote client failed with an error the adapter does not recover from.
    #[error(transparent)]
    Remote(#[from] RemoteClientError),
}

impl ApplicationError {
    /// Returns true if the error was raised before contacting the remote system.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
