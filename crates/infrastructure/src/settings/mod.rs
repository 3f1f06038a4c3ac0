//! Client settings loading.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `JIRA_AUTH__*` environment variables (e.g. `JIRA_AUTH__ENDPOINT`),
//! then an explicit endpoint override.

use std::path::Path;

use config::{Config, Environment, File, FileFormat, Map};
use jira_auth_domain::{ClientSettings, DomainError};
use thiserror::Error;

/// Prefix of the environment variables read by `load_settings`.
pub const ENV_PREFIX: &str = "JIRA_AUTH";

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A settings source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(String),

    /// The loaded settings are not usable.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl From<config::ConfigError> for SettingsError {
    fn from(error: config::ConfigError) -> Self {
        Self::Load(error.to_string())
    }
}

/// Loads and validates client settings from the process environment and an
/// optional TOML file. `endpoint` overrides every other source.
///
/// # Errors
///
/// Returns `SettingsError::Load` if the file cannot be read or a value has the
/// wrong type, and `SettingsError::Invalid` if validation fails.
pub fn load_settings(
    path: Option<&Path>,
    endpoint: Option<&str>,
) -> Result<ClientSettings, SettingsError> {
    load_settings_from(path, endpoint, None)
}

/// Like `load_settings`, but reads environment variables from `env` instead
/// of the process environment when given.
///
/// # Errors
///
/// See `load_settings`.
pub fn load_settings_from(
    path: Option<&Path>,
    endpoint: Option<&str>,
    env: Option<Map<String, String>>,
) -> Result<ClientSettings, SettingsError> {
    let mut builder = Config::builder().add_source(Config::try_from(&ClientSettings::default())?);

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(env),
    );
    builder = builder.set_override_option("endpoint", endpoint)?;

    let settings: ClientSettings = builder.build()?.try_deserialize()?;
    settings.validate()?;

    tracing::debug!(
        endpoint = %settings.endpoint,
        timeout_secs = settings.timeout_secs,
        "loaded client settings"
    );

    Ok(settings)
}
