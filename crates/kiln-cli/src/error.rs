//! Error handling for the Kiln CLI.
//!
//! `CliError` wraps everything a command can fail with. Config errors come
//! from `kiln-config` untouched; [`cli_error_to_miette`] adds the hints shown
//! to the user at exit.

use kiln_config::ConfigError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or validating configuration failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{msg}: {err}"))
        })
    }
}

/// Convert a `CliError` to a miette report, attaching a hint where one helps.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match &err {
        CliError::Config(config_err) => match config_hint(config_err) {
            Some(hint) => miette::miette!(help = hint, "{}", err),
            None => miette::miette!("{}", err),
        },
        _ => miette::miette!("{}", err),
    }
}

fn config_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NotFound => {
            Some("Create a kiln.toml in the project root, add a \"kiln\" field to package.json, or pass --config <path>")
        }
        ConfigError::UnknownProfile { .. } => {
            Some("Run 'kiln check' to list the profiles defined in the config")
        }
        ConfigError::InvalidProfileOverride { .. } => {
            Some("Profile tables must use the same keys and types as the top-level tables")
        }
        ConfigError::Environment(_) => {
            Some("KILN_CDN_LOCAL takes true/false and KILN_CPUS a positive number")
        }
        ConfigError::AliasDirNotFound { .. } => {
            Some("Create the directory or drop the alias from [aliases]")
        }
        _ => None,
    }
}
