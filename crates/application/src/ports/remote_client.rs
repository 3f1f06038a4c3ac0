//! Remote RPC client port

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::auth::RemoteFault;

/// Errors raised by a remote client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteClientError {
    /// The remote side reported a fault.
    #[error(transparent)]
    Fault(#[from] RemoteFault),

    /// The request never produced a usable response.
    #[error("transport error: {message}")]
    Transport {
        /// Error description.
        message: String,
        /// Whether the request timed out.
        timeout: bool,
    },

    /// The endpoint URL could not be used.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The response could not be understood.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl RemoteClientError {
    /// Returns the fault if this error carries one.
    #[must_use]
    pub const fn as_fault(&self) -> Option<&RemoteFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}

/// Port for a session with the remote issue tracker.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Logs in with the given username and credential.
    ///
    /// Returns the token issued by the remote side. `None` or an empty
    /// string means no token was issued.
    ///
    /// # Errors
    ///
    /// Returns `RemoteClientError::Fault` when the remote side rejects the
    /// call, or another variant on transport-level failures.
    async fn login(
        &self,
        username: &str,
        credential: &SecretString,
    ) -> Result<Option<String>, RemoteClientError>;
}

/// Port for creating remote client sessions bound to an endpoint.
pub trait RemoteClientFactory: Send + Sync {
    /// The client type produced by this factory.
    type Client: RemoteClient;

    /// Creates a client bound to `endpoint`. No network traffic happens here.
    ///
    /// # Errors
    ///
    /// Returns `RemoteClientError::InvalidEndpoint` if the endpoint is unusable.
    fn connect(&self, endpoint: &str) -> Result<Self::Client, RemoteClientError>;
}
