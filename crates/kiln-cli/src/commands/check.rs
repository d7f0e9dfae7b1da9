//! Check command implementation.
//!
//! Validates configuration without resolving a profile.

use kiln_config::{ConfigError, ConfigValidator, FsValidator, KilnConfig, SchemaValidator};
use tracing::debug;

use crate::cli::CheckArgs;
use crate::commands::utils::Project;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load kiln.toml (or package.json#kiln) and apply `--profile`
/// 2. Check the tables against the schema rules
/// 3. With `--fs`, check that alias directories exist under the root
/// 4. List the profiles the config defines
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let project = Project::from_args(&args.config)?;
    let config = match project.load_config(&args.config, true) {
        Ok(config) => config,
        Err(CliError::Config(ConfigError::NotFound)) if args.config.config.is_none() => {
            ui::warning("No kiln.toml found, checking built-in defaults");
            KilnConfig::default().materialize_profile(args.config.profile.as_deref())?
        }
        Err(err) => return Err(err),
    };

    let validated = if args.fs {
        debug!(root = %project.root().display(), "checking alias directories");
        FsValidator::new(project.root()).validate(&config.tables)
    } else {
        SchemaValidator.validate(&config.tables)
    };
    if let Err(err) = validated {
        ui::error("Configuration is invalid");
        return Err(err.into());
    }

    ui::success("Configuration is valid!");

    let profiles = config.profile_names();
    if !profiles.is_empty() {
        ui::info(&format!("Profiles: {}", profiles.join(", ")));
    }

    Ok(())
}
