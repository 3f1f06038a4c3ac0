//! JIRA SOAP client implementation using reqwest.
//!
//! This adapter implements the `RemoteClient` and `RemoteClientFactory`
//! ports against the JIRA SOAP RPC service.

use std::time::Duration;

use async_trait::async_trait;
use jira_auth_application::{RemoteClient, RemoteClientError, RemoteClientFactory};
use jira_auth_domain::ClientSettings;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::soap::{LoginResponse, login_envelope, parse_login_response};

/// Content-Type for SOAP 1.1 requests.
const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Creates `SoapJiraClient`s that share one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct SoapJiraClientFactory {
    client: Client,
    soap_path: String,
}

impl SoapJiraClientFactory {
    /// Creates a factory from client settings.
    ///
    /// Only the timeout, user agent and SOAP path are used here; the
    /// endpoint is supplied per `connect` call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(settings: &ClientSettings) -> Result<Self, RemoteClientError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RemoteClientError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                timeout: false,
            })?;

        Ok(Self::with_client(client, settings.soap_path.clone()))
    }

    /// Creates a factory with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, soap_path: impl Into<String>) -> Self {
        Self {
            client,
            soap_path: soap_path.into(),
        }
    }

    fn service_url(&self, endpoint: &str) -> Result<Url, RemoteClientError> {
        let base = Url::parse(endpoint)
            .map_err(|e| RemoteClientError::InvalidEndpoint(format!("{e}: {endpoint}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(RemoteClientError::InvalidEndpoint(format!(
                "unsupported scheme '{}': {endpoint}",
                base.scheme()
            )));
        }

        let joined = format!(
            "{}/{}",
            endpoint.trim_end_matches('/'),
            self.soap_path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| RemoteClientError::InvalidEndpoint(format!("{e}: {joined}")))
    }
}

impl RemoteClientFactory for SoapJiraClientFactory {
    type Client = SoapJiraClient;

    fn connect(&self, endpoint: &str) -> Result<SoapJiraClient, RemoteClientError> {
        Ok(SoapJiraClient {
            client: self.client.clone(),
            service_url: self.service_url(endpoint)?,
        })
    }
}

/// A session with one JIRA SOAP service.
#[derive(Debug, Clone)]
pub struct SoapJiraClient {
    client: Client,
    service_url: Url,
}

impl SoapJiraClient {
    /// The SOAP service URL this client posts to.
    #[must_use]
    pub const fn service_url(&self) -> &Url {
        &self.service_url
    }

    /// Maps reqwest errors to `RemoteClientError`.
    fn map_error(error: &reqwest::Error) -> RemoteClientError {
        RemoteClientError::Transport {
            message: error.to_string(),
            timeout: error.is_timeout(),
        }
    }
}

#[async_trait]
impl RemoteClient for SoapJiraClient {
    async fn login(
        &self,
        username: &str,
        credential: &SecretString,
    ) -> Result<Option<String>, RemoteClientError> {
        let body = login_envelope(username, credential.expose_secret());

        tracing::debug!(url = %self.service_url, username, "sending SOAP login");

        let response = self
            .client
            .post(self.service_url.clone())
            .header("Content-Type", SOAP_CONTENT_TYPE)
            .header("SOAPAction", "\"\"")
            .body(body)
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| Self::map_error(&e))?;

        // SOAP faults usually arrive with HTTP 500, so parse before checking the status.
        match parse_login_response(&text) {
            LoginResponse::Token(token) => {
                tracing::debug!(status = status.as_u16(), issued = token.is_some(), "SOAP login returned");
                Ok(token)
            }
            LoginResponse::Fault(fault) => {
                tracing::debug!(status = status.as_u16(), fault = %fault.message, "SOAP login fault");
                Err(fault.into())
            }
            LoginResponse::Unrecognized if !status.is_success() => {
                Err(RemoteClientError::Transport {
                    message: format!("HTTP {status}"),
                    timeout: false,
                })
            }
            LoginResponse::Unrecognized => Err(RemoteClientError::MalformedResponse(
                "no loginReturn or faultstring in response".to_string(),
            )),
        }
    }
}
