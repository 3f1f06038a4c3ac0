//! Authentication adapter contract.

use async_trait::async_trait;
use jira_auth_domain::Identity;

use crate::ApplicationResult;

/// Trait for authentication adapters.
///
/// An adapter authenticates one username/credential pair against a single
/// backend. Implementations are interchangeable behind `Box<dyn AuthAdapter>`.
#[async_trait]
pub trait AuthAdapter: Send + Sync {
    /// Sets the username to authenticate. Overwrites any previous value.
    fn set_username(&mut self, username: String);

    /// Sets the credential to authenticate. Overwrites any previous value.
    fn set_credential(&mut self, credential: String);

    /// Authenticates the current username and credential.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidInput` if the username or
    /// credential is empty, or `ApplicationError::Remote` if the backend
    /// failed in a way the adapter does not recover from.
    async fn authenticate(&self) -> ApplicationResult<Identity>;
}
