//! Command-line arguments and the authentication run.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jira_auth_application::{ApplicationError, AuthAdapter, JiraAuthAdapter, RemoteClientError};
use jira_auth_domain::Identity;
use jira_auth_infrastructure::{SettingsError, SoapJiraClientFactory, load_settings};
use thiserror::Error;

/// Environment variable holding the credential for non-interactive use.
pub const CREDENTIAL_ENV_VAR: &str = "JIRA_AUTH_CREDENTIAL";

/// Authenticate a user against a JIRA installation.
#[derive(Debug, Parser)]
#[command(name = "jira-auth", version, about)]
pub struct Cli {
    /// TOML settings file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// URL of the JIRA installation. Overrides the settings file and environment.
    #[arg(long, short)]
    pub endpoint: Option<String>,

    /// Username to authenticate.
    #[arg(long, short)]
    pub username: String,
}

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Client(#[from] RemoteClientError),

    /// Authentication failed with an error.
    #[error(transparent)]
    Auth(#[from] ApplicationError),

    /// No credential could be obtained.
    #[error("credential: {0}")]
    Credential(String),
}

/// Reads the credential from `JIRA_AUTH_CREDENTIAL` or, on a terminal, a prompt.
fn read_credential() -> Result<String, CliError> {
    if let Ok(credential) = std::env::var(CREDENTIAL_ENV_VAR)
        && !credential.is_empty()
    {
        return Ok(credential);
    }

    if std::io::stdin().is_terminal() {
        eprint!("Password: ");
        return rpassword::read_password()
            .map_err(|e| CliError::Credential(format!("failed to read password: {e}")));
    }

    Err(CliError::Credential(format!(
        "no credential provided. Set {CREDENTIAL_ENV_VAR} or run interactively."
    )))
}

/// Loads settings, builds the adapter and authenticates once.
///
/// # Errors
///
/// Returns an error if settings, the credential or the remote call fail.
pub async fn run(cli: Cli) -> Result<Identity, CliError> {
    let settings = load_settings(cli.config.as_deref(), cli.endpoint.as_deref())?;
    let factory = SoapJiraClientFactory::new(&settings)?;

    let mut adapter = JiraAuthAdapter::new(settings.endpoint, factory);
    adapter.set_username(cli.username);
    adapter.set_credential(read_credential()?);

    Ok(adapter.authenticate().await?)
}

/// Exit code for a finished authentication: 0 on success, 1 otherwise.
#[must_use]
pub fn exit_code(identity: &Identity) -> ExitCode {
    if identity.is_authenticated() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jira_auth_domain::AuthResult;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "jira-auth",
            "--endpoint",
            "https://jira.example.com",
            "-u",
            "alice",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("https://jira.example.com"));
        assert_eq!(cli.username, "alice");
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_username_is_required() {
        assert!(Cli::try_parse_from(["jira-auth", "-e", "https://jira.example.com"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let ok = Identity::new(AuthResult::AuthSuccess, "alice", Some("t".to_string()));
        let unknown = Identity::new(AuthResult::IdentityUnknown, "alice", None);

        assert_eq!(
            format!("{:?}", exit_code(&ok)),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", exit_code(&unknown)),
            format!("{:?}", ExitCode::from(1))
        );
    }
}
