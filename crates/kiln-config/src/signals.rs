//! Environment signals the resolver is driven by.
//!
//! Signals are plain values. Reading them from the process environment is
//! kept in [`EnvSource`] so the resolver never touches ambient state.

use std::fmt;
use std::path::PathBuf;

use figment::{Figment, providers::Env};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Host operating system, using Node's `process.platform` names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HostPlatform {
    /// macOS (`darwin`)
    Darwin,
    Linux,
    /// Windows (`win32`)
    Windows,
    Other(String),
}

impl HostPlatform {
    /// Platform of the running binary.
    pub fn current() -> Self {
        Self::from(std::env::consts::OS)
    }

    pub fn as_str(&self) -> &str {
        match self {
            HostPlatform::Darwin => "darwin",
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "win32",
            HostPlatform::Other(name) => name,
        }
    }

    /// Whether the dev server should open a browser on start.
    pub fn is_mac_like(&self) -> bool {
        matches!(self, HostPlatform::Darwin)
    }
}

impl From<&str> for HostPlatform {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "darwin" | "macos" => HostPlatform::Darwin,
            "linux" => HostPlatform::Linux,
            "win32" | "windows" => HostPlatform::Windows,
            other => HostPlatform::Other(other.to_string()),
        }
    }
}

impl From<String> for HostPlatform {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<HostPlatform> for String {
    fn from(value: HostPlatform) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSignals {
    pub is_production: bool,

    /// Load externalized dependencies from the CDN outside production too.
    pub use_cdn_locally: bool,

    pub platform: HostPlatform,

    /// Logical CPUs on the build host.
    pub cpu_count: usize,

    /// Directory path aliases are resolved against.
    pub project_root: PathBuf,
}

impl EnvironmentSignals {
    /// Development signals for `platform`: no CDN, a single CPU, rooted at `.`.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{EnvironmentSignals, HostPlatform};
    ///
    /// let signals = EnvironmentSignals::new(HostPlatform::Linux)
    ///     .production(true)
    ///     .cpus(8);
    /// assert!(signals.is_production);
    /// assert!(!signals.use_cdn_locally);
    /// ```
    pub fn new(platform: HostPlatform) -> Self {
        Self {
            is_production: false,
            use_cdn_locally: false,
            platform,
            cpu_count: 1,
            project_root: PathBuf::from("."),
        }
    }

    pub fn production(mut self, is_production: bool) -> Self {
        self.is_production = is_production;
        self
    }

    pub fn cdn_locally(mut self, use_cdn_locally: bool) -> Self {
        self.use_cdn_locally = use_cdn_locally;
        self
    }

    pub fn cpus(mut self, cpu_count: usize) -> Self {
        self.cpu_count = cpu_count;
        self
    }

    pub fn root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = project_root.into();
        self
    }

    /// Whether externalized dependencies come from the CDN table.
    pub fn cdn_active(&self) -> bool {
        self.is_production || self.use_cdn_locally
    }

    /// Read signals from the process environment.
    ///
    /// See [`EnvSource`] for the variables consulted.
    pub fn from_env() -> Result<Self> {
        Ok(EnvSource::from_env()?.into_signals())
    }
}

#[derive(Debug, Default, Deserialize)]
struct TypedEnv {
    #[serde(default)]
    cdn_local: Option<bool>,

    #[serde(default)]
    cpus: Option<usize>,
}

/// Raw environment values before defaults are applied.
///
/// | Variable         | Field       |
/// |------------------|-------------|
/// | `NODE_ENV`       | `node_env`  |
/// | `KILN_CDN_LOCAL` | `cdn_local` |
/// | `KILN_PLATFORM`  | `platform`  |
/// | `KILN_CPUS`      | `cpus`      |
/// | `KILN_ROOT`      | `root`      |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSource {
    #[serde(default)]
    pub node_env: Option<String>,

    #[serde(default)]
    pub cdn_local: Option<bool>,

    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub cpus: Option<usize>,

    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl EnvSource {
    /// Read the variables listed above.
    ///
    /// `NODE_ENV`, `KILN_PLATFORM` and `KILN_ROOT` are taken verbatim, so
    /// values such as `NODE_ENV=1` or `KILN_ROOT=2024` never fail to parse.
    /// Only `KILN_CDN_LOCAL` and `KILN_CPUS` are typed.
    pub fn from_env() -> Result<Self> {
        let typed: TypedEnv = Figment::new()
            .merge(Env::prefixed("KILN_").filter(|key| {
                ["cdn_local", "cpus"]
                    .iter()
                    .any(|known| key.as_str().eq_ignore_ascii_case(known))
            }))
            .extract()
            .map_err(|err| ConfigError::Environment(err.to_string()))?;

        let source = EnvSource {
            node_env: Env::var("NODE_ENV"),
            cdn_local: typed.cdn_local,
            platform: Env::var("KILN_PLATFORM").filter(|value| !value.trim().is_empty()),
            cpus: typed.cpus,
            root: Env::var("KILN_ROOT")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
        };

        debug!(?source, "read environment signals");
        Ok(source)
    }

    /// Apply defaults.
    ///
    /// Anything other than `NODE_ENV=development` counts as production, so an
    /// unset `NODE_ENV` builds for production. The CDN is preferred locally
    /// unless `KILN_CDN_LOCAL=false`. Platform and CPU count fall back to the
    /// running host.
    pub fn into_signals(self) -> EnvironmentSignals {
        let is_production = self
            .node_env
            .as_deref()
            .is_none_or(|env| env.trim() != "development");

        let platform = self
            .platform
            .as_deref()
            .map(HostPlatform::from)
            .unwrap_or_else(HostPlatform::current);

        let cpu_count = self.cpus.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });

        EnvironmentSignals {
            is_production,
            use_cdn_locally: self.cdn_local.unwrap_or(true),
            platform,
            cpu_count,
            project_root: self.root.unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
