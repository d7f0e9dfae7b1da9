use serde::{Deserialize, Serialize};

/// JavaScript minifier settings. Disabled by default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinifyOptions {
    #[serde(default)]
    pub enabled: bool,

    /// Remove `console.*` calls
    #[serde(default)]
    pub strip_console: bool,

    /// Remove `debugger` statements
    #[serde(default)]
    pub strip_debugger: bool,

    /// Calls treated as side-effect free and dropped when unused
    #[serde(default)]
    pub pure_funcs: Vec<String>,

    /// Print minifier warnings
    #[serde(default)]
    pub warnings: bool,

    /// Emit source maps for minified output
    #[serde(default)]
    pub source_map: bool,

    /// Minify on multiple workers
    #[serde(default)]
    pub parallel: bool,
}
