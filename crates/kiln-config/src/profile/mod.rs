//! The resolved build profile handed to the build tool.

mod assets;
mod chunks;
mod compression;
mod dev;
mod minify;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use assets::{CdnAssets, CssOptions, ImageOptimization, ThreadPoolOptions};
pub use chunks::{ChunkGroup, ChunkGroupKind, ChunkSelection};
pub use compression::{CompressionAlgorithm, CompressionOptions};
pub use dev::{DevServerOptions, ProxyRule};
pub use minify::MinifyOptions;

pub(crate) use chunks::default_chunk_groups;

/// Fully resolved build-tool parameters for one invocation.
///
/// Produced by [`crate::resolve`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildProfile {
    /// Output directory for emitted assets
    pub output_dir: PathBuf,

    /// Lint sources when they are saved during development
    pub lint_on_save: bool,

    /// Emit source maps for production bundles
    pub production_source_map: bool,

    /// Dependencies loaded from a global instead of being bundled
    ///
    /// Key: module specifier (e.g. `vue-router`)
    /// Value: global variable name (e.g. `VueRouter`)
    pub external_modules: IndexMap<String, String>,

    pub cdn_assets: CdnAssets,

    /// Whether the HTML template receives `cdn_assets`
    pub inject_cdn_into_html: bool,

    /// Import aliases resolved against the project root
    pub path_aliases: IndexMap<String, PathBuf>,

    /// Modules prepended to named entries
    pub entry_polyfills: IndexMap<String, Vec<String>>,

    pub image_optimization: ImageOptimization,

    pub thread_pool: ThreadPoolOptions,

    /// Run loaders such as babel on worker threads
    pub parallel: bool,

    pub css: CssOptions,

    pub minify: MinifyOptions,

    pub compression: CompressionOptions,

    /// Split groups in precedence order, runtime first
    pub chunk_groups: Vec<ChunkGroup>,

    pub dev_server: DevServerOptions,
}

impl BuildProfile {
    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "profile".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn chunk_group(&self, name: &str) -> Option<&ChunkGroup> {
        self.chunk_groups.iter().find(|group| group.name == name)
    }

    /// Cache group a module is assigned to: the highest priority match.
    ///
    /// Ties go to the group declared first.
    pub fn chunk_group_for(&self, module_path: &str) -> Option<&ChunkGroup> {
        let mut best: Option<&ChunkGroup> = None;
        for group in self.chunk_groups.iter().filter(|g| g.matches(module_path)) {
            let priority = group.priority.unwrap_or(0);
            if best.is_none_or(|b| priority > b.priority.unwrap_or(0)) {
                best = Some(group);
            }
        }
        best
    }

    /// Whether `module` is loaded from a global instead of being bundled.
    pub fn is_external(&self, module: &str) -> bool {
        self.external_modules.contains_key(module)
    }
}
