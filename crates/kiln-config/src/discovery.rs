//! File-based config discovery for CLI use
//!
//! Handles finding and loading Kiln configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE: &str = "kiln.toml";
pub const PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_FIELD: &str = "kiln";

/// Where a discovered config lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A `kiln.toml` file
    Toml(PathBuf),
    /// The `kiln` field of a `package.json`
    PackageJson(PathBuf),
}

impl ConfigSource {
    /// Classify an explicit path by its file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
            ConfigSource::PackageJson(path)
        } else {
            ConfigSource::Toml(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Toml(path) | ConfigSource::PackageJson(path) => path,
        }
    }

    /// Read the source into a JSON value.
    pub fn read_value(&self) -> Result<Value> {
        match self {
            ConfigSource::Toml(path) => read_toml(path),
            ConfigSource::PackageJson(path) => read_package_field(path),
        }
    }
}

/// File-based configuration discovery
///
/// Searches for Kiln configuration files in conventional locations and loads them.
/// This is primarily for CLI use - library users should use `KilnConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config source in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: kiln.toml
    /// 2. package.json (kiln field)
    pub fn find(&self) -> Option<ConfigSource> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            debug!(path = %toml_path.display(), "found config file");
            return Some(ConfigSource::Toml(toml_path));
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_FIELD).is_some_and(|v| !v.is_null()) {
                        debug!(path = %pkg_path.display(), "found config in package.json");
                        return Some(ConfigSource::PackageJson(pkg_path));
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<KilnConfig> {
        let source = self.find().ok_or(ConfigError::NotFound)?;
        KilnConfig::from_value(source.read_value()?)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<KilnConfig> {
        self.load()?.materialize_profile(Some(profile))
    }
}

fn read_toml(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let toml_val: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("Invalid TOML syntax: {}", e)),
    })?;

    serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("TOML to JSON conversion failed: {}", e)),
    })
}

fn read_package_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: PACKAGE_JSON.to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    let value = parsed
        .get(PACKAGE_FIELD)
        .ok_or_else(|| ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("Add a 'kiln' field to your package.json".to_string()),
        })?;

    if value.is_null() {
        return Err(ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("The 'kiln' field cannot be null".to_string()),
        });
    }

    Ok(value.clone())
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use kiln_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<KilnConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use kiln_config::discover_with_profile;
///
/// let config = discover_with_profile("staging").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<KilnConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
