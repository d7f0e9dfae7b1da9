//! Static data the resolver combines with environment signals.
//!
//! Every field has a built-in default reproducing the stock Vue setup, so a
//! project file only needs to spell out what it changes.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::profile::{
    ChunkGroup, CompressionAlgorithm, CssOptions, ImageOptimization, ProxyRule,
    ThreadPoolOptions, default_chunk_groups,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverTables {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_true")]
    pub lint_on_save: bool,

    #[serde(default = "default_true")]
    pub production_source_map: bool,

    #[serde(default)]
    pub cdn: CdnTable,

    /// Alias → directory relative to the project root
    #[serde(default = "default_aliases")]
    pub aliases: IndexMap<String, PathBuf>,

    /// Entry name → modules prepended to it
    #[serde(default = "default_entry_polyfills")]
    pub entry_polyfills: IndexMap<String, Vec<String>>,

    #[serde(default)]
    pub image_optimization: ImageOptimization,

    #[serde(default)]
    pub thread_pool: ThreadPoolOptions,

    #[serde(default)]
    pub css: CssOptions,

    #[serde(default)]
    pub minify: MinifyTable,

    #[serde(default)]
    pub compression: CompressionTable,

    /// Production split groups, in precedence order
    #[serde(default = "default_chunk_groups")]
    pub chunk_groups: Vec<ChunkGroup>,

    #[serde(default)]
    pub dev_server: DevServerTable,
}

impl Default for ResolverTables {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            lint_on_save: true,
            production_source_map: true,
            cdn: CdnTable::default(),
            aliases: default_aliases(),
            entry_polyfills: default_entry_polyfills(),
            image_optimization: ImageOptimization::default(),
            thread_pool: ThreadPoolOptions::default(),
            css: CssOptions::default(),
            minify: MinifyTable::default(),
            compression: CompressionTable::default(),
            chunk_groups: default_chunk_groups(),
            dev_server: DevServerTable::default(),
        }
    }
}

impl ResolverTables {
    /// Add or replace an externalized dependency and its CDN script.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::ResolverTables;
    ///
    /// let tables = ResolverTables::default().with_external(
    ///     "axios",
    ///     "axios",
    ///     "https://cdn.staticfile.org/axios/0.19.0/axios.min.js",
    /// );
    /// assert_eq!(tables.cdn.externals["axios"], "axios");
    /// assert_eq!(tables.cdn.js.len(), 4);
    /// ```
    pub fn with_external(
        mut self,
        module: impl Into<String>,
        global: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        self.cdn.externals.insert(module.into(), global.into());
        let script = script.into();
        if !self.cdn.js.contains(&script) {
            self.cdn.js.push(script);
        }
        self
    }

    /// Add or replace a path alias.
    pub fn with_alias(mut self, alias: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.aliases.insert(alias.into(), dir.into());
        self
    }
}

/// Dependencies served from a CDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnTable {
    /// Module specifier → global variable
    #[serde(default)]
    pub externals: IndexMap<String, String>,

    #[serde(default)]
    pub css: Vec<String>,

    #[serde(default)]
    pub js: Vec<String>,
}

impl Default for CdnTable {
    fn default() -> Self {
        let externals = [("vue", "Vue"), ("vuex", "Vuex"), ("vue-router", "VueRouter")]
            .into_iter()
            .map(|(module, global)| (module.to_string(), global.to_string()))
            .collect();

        Self {
            externals,
            css: Vec::new(),
            js: vec![
                "https://cdn.staticfile.org/vue/2.6.10/vue.min.js".to_string(),
                "https://cdn.staticfile.org/vuex/3.0.1/vuex.min.js".to_string(),
                "https://cdn.staticfile.org/vue-router/3.0.3/vue-router.min.js".to_string(),
            ],
        }
    }
}

/// Production minifier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyTable {
    #[serde(default = "default_true")]
    pub strip_console: bool,

    #[serde(default = "default_true")]
    pub strip_debugger: bool,

    #[serde(default = "default_pure_funcs")]
    pub pure_funcs: Vec<String>,

    #[serde(default)]
    pub warnings: bool,

    #[serde(default)]
    pub source_map: bool,

    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for MinifyTable {
    fn default() -> Self {
        Self {
            strip_console: true,
            strip_debugger: true,
            pure_funcs: default_pure_funcs(),
            warnings: false,
            source_map: false,
            parallel: true,
        }
    }
}

/// Production compression settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionTable {
    #[serde(default)]
    pub algorithm: CompressionAlgorithm,

    #[serde(default = "default_compressed_filename")]
    pub filename: String,

    #[serde(default = "default_compressed_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_threshold")]
    pub threshold: u64,

    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,

    #[serde(default)]
    pub delete_original_assets: bool,
}

impl Default for CompressionTable {
    fn default() -> Self {
        Self {
            algorithm: CompressionAlgorithm::Gzip,
            filename: default_compressed_filename(),
            extensions: default_compressed_extensions(),
            threshold: default_threshold(),
            min_ratio: default_min_ratio(),
            delete_original_assets: false,
        }
    }
}

/// Dev server settings that do not depend on the signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerTable {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub https: bool,

    #[serde(default)]
    pub hot_only: bool,

    #[serde(default = "default_proxy")]
    pub proxy: Vec<ProxyRule>,
}

impl Default for DevServerTable {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            https: false,
            hot_only: false,
            proxy: default_proxy(),
        }
    }
}

// Helper defaults
fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/dist")
}

fn default_aliases() -> IndexMap<String, PathBuf> {
    [
        ("@", "src"),
        ("components", "src/components"),
        ("views", "src/views"),
        ("assets", "src/assets"),
        ("common", "src/common"),
    ]
    .into_iter()
    .map(|(alias, dir)| (alias.to_string(), PathBuf::from(dir)))
    .collect()
}

fn default_entry_polyfills() -> IndexMap<String, Vec<String>> {
    let mut polyfills = IndexMap::new();
    polyfills.insert("main".to_string(), vec!["babel-polyfill".to_string()]);
    polyfills
}

fn default_pure_funcs() -> Vec<String> {
    vec!["console.log".to_string()]
}

fn default_compressed_filename() -> String {
    "[path].gz[query]".to_string()
}

fn default_compressed_extensions() -> Vec<String> {
    vec!["html".to_string(), "js".to_string(), "css".to_string()]
}

fn default_threshold() -> u64 {
    10_240
}

fn default_min_ratio() -> f64 {
    0.8
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_proxy() -> Vec<ProxyRule> {
    vec![ProxyRule::preserving("/gxyundata", "http://localhost:3000/")]
}
