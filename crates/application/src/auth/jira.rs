//! JIRA authentication adapter.

use async_trait::async_trait;
use jira_auth_domain::{AuthResult, DomainError, Identity};
use secrecy::{ExposeSecret, SecretString};

use crate::ApplicationResult;
use crate::auth::{AuthAdapter, FaultKind};
use crate::ports::{RemoteClient, RemoteClientError, RemoteClientFactory};

/// Authenticates users against a JIRA installation.
///
/// Every `authenticate` call opens a fresh remote session bound to the
/// endpoint given at construction and performs a single login.
pub struct JiraAuthAdapter<F> {
    endpoint: String,
    username: String,
    credential: SecretString,
    factory: F,
}

impl<F: RemoteClientFactory> JiraAuthAdapter<F> {
    /// Creates an adapter for the JIRA installation at `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, factory: F) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: String::new(),
            credential: SecretString::from(String::new()),
            factory,
        }
    }

    /// The endpoint this adapter authenticates against.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The currently configured username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    fn check_input(&self) -> ApplicationResult<()> {
        if self.username.is_empty() {
            return Err(DomainError::InvalidInput("Username cannot be empty".to_string()).into());
        }
        if self.credential.expose_secret().is_empty() {
            return Err(DomainError::InvalidInput("Credential cannot be empty".to_string()).into());
        }
        Ok(())
    }
}

/// A token counts as issued only when it is present and non-empty.
fn is_truthy(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

#[async_trait]
impl<F: RemoteClientFactory> AuthAdapter for JiraAuthAdapter<F> {
    fn set_username(&mut self, username: String) {
        self.username = username;
    }

    fn set_credential(&mut self, credential: String) {
        self.credential = SecretString::from(credential);
    }

    async fn authenticate(&self) -> ApplicationResult<Identity> {
        self.check_input()?;

        let client = self.factory.connect(&self.endpoint)?;

        let (result, token) = match client.login(&self.username, &self.credential).await {
            Ok(token) if is_truthy(token.as_deref()) => (AuthResult::AuthSuccess, token),
            Ok(token) => (AuthResult::IdentityUnknown, token),
            Err(RemoteClientError::Fault(fault)) => match fault.classify() {
                FaultKind::InvalidCredentials => {
                    tracing::debug!(
                        endpoint = %self.endpoint,
                        username = %self.username,
                        "remote rejected credentials"
                    );
                    (AuthResult::IdentityUnknown, None)
                }
                FaultKind::AuthenticationRejected { .. } | FaultKind::Unrecognized => {
                    tracing::debug!(endpoint = %self.endpoint, fault = %fault.message, "remote fault");
                    return Err(RemoteClientError::Fault(fault).into());
                }
            },
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            username = %self.username,
            result = %result,
            "authentication finished"
        );

        Ok(Identity::new(result, self.username.clone(), token))
    }
}

impl<F> std::fmt::Debug for JiraAuthAdapter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraAuthAdapter")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("credential", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
