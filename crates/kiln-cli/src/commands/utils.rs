//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use kiln_config::{ConfigLoader, EnvSource, EnvironmentSignals, GlobalSettings, KilnConfig};
use tracing::debug;

use crate::cli::{ConfigArgs, SignalArgs};
use crate::error::Result;

/// Project root and environment shared by every step of a command.
///
/// The root is `--root` when it was changed from `.`, else `KILN_ROOT`, else
/// `.`. Config discovery and alias resolution both use it.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    env: EnvSource,
}

impl Project {
    /// Read the environment and settle on the project root.
    pub fn from_args(args: &ConfigArgs) -> Result<Self> {
        Ok(Self::with_env(args, EnvSource::from_env()?))
    }

    pub fn with_env(args: &ConfigArgs, env: EnvSource) -> Self {
        let root = if args.root != Path::new(".") {
            args.root.clone()
        } else {
            env.root.clone().unwrap_or_else(|| args.root.clone())
        };
        debug!(root = %root.display(), "project root");
        Self { root, env }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the project config with the selected profile applied.
    pub fn load_config(&self, args: &ConfigArgs, require_file: bool) -> Result<KilnConfig> {
        let config = ConfigLoader::new(&self.root)
            .with_file(args.config.as_ref())
            .with_profile(args.profile.as_deref())
            .require_file(require_file)
            .load()?;
        Ok(config)
    }

    /// Environment signals with command-line overrides applied.
    pub fn signals(&self, args: &SignalArgs) -> EnvironmentSignals {
        let mut source = self.env.clone();
        apply_overrides(&mut source, args);
        source.root = Some(self.root.clone());
        debug!(?source, "signal sources after overrides");
        source.into_signals()
    }
}

/// Settings from the project's config, read before logging is set up.
///
/// Uses the same root, file and profile as the command. Any failure falls
/// back to defaults; the command itself reports config errors once logging
/// is running.
pub fn peek_settings(args: &ConfigArgs) -> GlobalSettings {
    let env = EnvSource::from_env().unwrap_or_default();
    Project::with_env(args, env)
        .load_config(args, false)
        .map(|config| config.settings)
        .unwrap_or_default()
}

fn apply_overrides(source: &mut EnvSource, args: &SignalArgs) {
    if args.production {
        source.node_env = Some("production".to_string());
    } else if args.development {
        source.node_env = Some("development".to_string());
    }
    if let Some(cdn_local) = args.cdn_local {
        source.cdn_local = Some(cdn_local);
    }
    if let Some(platform) = &args.platform {
        source.platform = Some(platform.clone());
    }
    if let Some(cpus) = args.cpus {
        source.cpus = Some(usize::from(cpus));
    }
}
