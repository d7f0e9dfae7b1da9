//! Layered config loading.
//!
//! Priority: `KILN_*` environment > config file > built-in defaults.
//! Tables given in the file replace the built-in table of the same name;
//! fields left out fall back to their defaults.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use tracing::debug;

use crate::config::KilnConfig;
use crate::discovery::{ConfigDiscovery, ConfigSource};
use crate::error::{ConfigError, Result};

/// Environment prefix for config overrides, split on `__`.
///
/// `KILN_TABLES__DEV_SERVER__PORT=9000` sets `tables.dev_server.port`.
pub const ENV_PREFIX: &str = "KILN_";

/// Builder for loading a [`KilnConfig`].
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigLoader;
///
/// let config = ConfigLoader::new(".")
///     .with_profile(Some("staging"))
///     .load()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    file: Option<PathBuf>,
    profile: Option<String>,
    require_file: bool,
}

impl ConfigLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
            profile: None,
            require_file: false,
        }
    }

    /// Load this file instead of searching the root. A missing file is an error.
    pub fn with_file(mut self, file: Option<impl Into<PathBuf>>) -> Self {
        self.file = file.map(Into::into);
        self
    }

    pub fn with_profile(mut self, profile: Option<impl Into<String>>) -> Self {
        self.profile = profile.map(Into::into);
        self
    }

    /// Fail with `NotFound` when no config file is discovered.
    pub fn require_file(mut self, require: bool) -> Self {
        self.require_file = require;
        self
    }

    /// Config source that will be read, if any.
    pub fn source(&self) -> Result<Option<ConfigSource>> {
        if let Some(file) = &self.file {
            let path = if file.is_absolute() {
                file.clone()
            } else {
                self.root.join(file)
            };
            if !path.exists() {
                return Err(ConfigError::NotFound);
            }
            return Ok(Some(ConfigSource::from_path(path)));
        }

        match ConfigDiscovery::new(&self.root).find() {
            Some(source) => Ok(Some(source)),
            None if self.require_file => Err(ConfigError::NotFound),
            None => Ok(None),
        }
    }

    pub fn load(&self) -> Result<KilnConfig> {
        let mut figment = Figment::new();

        match self.source()? {
            Some(source) => {
                debug!(path = %source.path().display(), "loading config");
                figment = figment.merge(Serialized::defaults(source.read_value()?));
            }
            None => debug!(root = %self.root.display(), "no config file, using defaults"),
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: KilnConfig = figment.extract()?;
        config.materialize_profile(self.profile.as_deref())
    }
}
