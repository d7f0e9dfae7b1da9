//! Resolve command implementation.
//!
//! Prints the build profile for the current environment to stdout.

use kiln_config::BuildProfile;
use tracing::{debug, info};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::utils::Project;
use crate::error::{Result, ResultExt};

/// Execute the resolve command.
///
/// 1. Load the project config and apply `--profile`
/// 2. Read environment signals, applying command-line overrides
/// 3. Resolve and print the profile in the requested format
pub fn execute(args: ResolveArgs) -> Result<()> {
    let project = Project::from_args(&args.config)?;
    let config = project.load_config(&args.config, false)?;
    let signals = project.signals(&args.signals);

    info!(
        production = signals.is_production,
        cdn = signals.cdn_active(),
        platform = %signals.platform,
        "resolving build profile"
    );

    let profile = config.resolver().resolve(&signals);
    debug!(
        externals = profile.external_modules.len(),
        chunk_groups = profile.chunk_groups.len(),
        "profile resolved"
    );

    let rendered = render(&profile, args.format, args.compact)?;
    println!("{rendered}");
    Ok(())
}

/// Render the profile as JSON or TOML.
pub fn render(profile: &BuildProfile, format: OutputFormat, compact: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if compact => serde_json::to_string(profile)?,
        OutputFormat::Json => serde_json::to_string_pretty(profile)?,
        OutputFormat::Toml => {
            toml::to_string_pretty(profile).context("Failed to render profile as TOML")?
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::{EnvironmentSignals, HostPlatform, resolve};

    fn production_profile() -> BuildProfile {
        resolve(&EnvironmentSignals::new(HostPlatform::Linux).production(true).cpus(4))
    }

    #[test]
    fn test_render_json_pretty_and_compact() {
        let profile = production_profile();

        let pretty = render(&profile, OutputFormat::Json, false).unwrap();
        let compact = render(&profile, OutputFormat::Json, true).unwrap();

        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["external_modules"]["vue"], "Vue");
    }

    #[test]
    fn test_render_toml() {
        let rendered = render(&production_profile(), OutputFormat::Toml, false).unwrap();
        let value: toml::Value = toml::from_str(&rendered).unwrap();
        assert_eq!(value["output_dir"].as_str(), Some("/dist"));
        assert_eq!(value["dev_server"]["port"].as_integer(), Some(8080));
    }
}
