//! Signals + tables → [`BuildProfile`].

use indexmap::IndexMap;
use tracing::debug;

use crate::profile::{
    BuildProfile, CdnAssets, CompressionOptions, DevServerOptions, MinifyOptions,
};
use crate::signals::EnvironmentSignals;
use crate::tables::ResolverTables;

/// Resolves build profiles against a fixed set of tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileResolver {
    tables: ResolverTables,
}

impl ProfileResolver {
    pub fn new(tables: ResolverTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ResolverTables {
        &self.tables
    }

    /// Derive the profile for `signals`. Never fails and has no side effects.
    pub fn resolve(&self, signals: &EnvironmentSignals) -> BuildProfile {
        let tables = &self.tables;
        let cdn_active = signals.cdn_active();

        debug!(
            production = signals.is_production,
            cdn_active,
            platform = %signals.platform,
            "resolving build profile"
        );

        let (external_modules, cdn_assets) = if cdn_active {
            (
                tables.cdn.externals.clone(),
                CdnAssets {
                    css: tables.cdn.css.clone(),
                    js: tables.cdn.js.clone(),
                },
            )
        } else {
            (IndexMap::new(), CdnAssets::default())
        };

        let path_aliases = tables
            .aliases
            .iter()
            .map(|(alias, dir)| (alias.clone(), signals.project_root.join(dir)))
            .collect();

        let (minify, compression, chunk_groups) = if signals.is_production {
            (
                self.production_minify(),
                self.production_compression(),
                tables.chunk_groups.clone(),
            )
        } else {
            (
                MinifyOptions::default(),
                CompressionOptions::default(),
                Vec::new(),
            )
        };

        BuildProfile {
            output_dir: tables.output_dir.clone(),
            lint_on_save: tables.lint_on_save,
            production_source_map: tables.production_source_map,
            external_modules,
            cdn_assets,
            inject_cdn_into_html: cdn_active,
            path_aliases,
            entry_polyfills: tables.entry_polyfills.clone(),
            image_optimization: tables.image_optimization.clone(),
            thread_pool: tables.thread_pool.clone(),
            parallel: signals.cpu_count > 1,
            css: tables.css.clone(),
            minify,
            compression,
            chunk_groups,
            dev_server: DevServerOptions {
                host: tables.dev_server.host.clone(),
                port: tables.dev_server.port,
                https: tables.dev_server.https,
                open: signals.platform.is_mac_like(),
                hot_only: tables.dev_server.hot_only,
                proxy: tables.dev_server.proxy.clone(),
            },
        }
    }

    fn production_minify(&self) -> MinifyOptions {
        let table = &self.tables.minify;
        MinifyOptions {
            enabled: true,
            strip_console: table.strip_console,
            strip_debugger: table.strip_debugger,
            pure_funcs: table.pure_funcs.clone(),
            warnings: table.warnings,
            source_map: table.source_map,
            parallel: table.parallel,
        }
    }

    fn production_compression(&self) -> CompressionOptions {
        let table = &self.tables.compression;
        CompressionOptions {
            enabled: true,
            algorithm: table.algorithm,
            filename: table.filename.clone(),
            extensions: table.extensions.clone(),
            threshold: table.threshold,
            min_ratio: table.min_ratio,
            delete_original_assets: table.delete_original_assets,
        }
    }
}

/// Resolve `signals` against the built-in tables.
///
/// # Example
///
/// ```
/// use kiln_config::{EnvironmentSignals, HostPlatform, resolve};
///
/// let profile = resolve(&EnvironmentSignals::new(HostPlatform::Darwin).production(true));
/// assert!(profile.minify.strip_console);
/// assert_eq!(profile.external_modules["vue"], "Vue");
/// assert!(profile.dev_server.open);
/// ```
pub fn resolve(signals: &EnvironmentSignals) -> BuildProfile {
    ProfileResolver::default().resolve(signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::HostPlatform;
    use std::path::PathBuf;

    #[test]
    fn aliases_join_project_root() {
        let signals = EnvironmentSignals::new(HostPlatform::Linux).root("/srv/site");
        let profile = resolve(&signals);
        assert_eq!(profile.path_aliases["@"], PathBuf::from("/srv/site/src"));
        assert_eq!(
            profile.path_aliases["components"],
            PathBuf::from("/srv/site/src/components")
        );
        let aliases: Vec<&str> = profile.path_aliases.keys().map(String::as_str).collect();
        assert_eq!(aliases, ["@", "components", "views", "assets", "common"]);
    }

    #[test]
    fn parallel_needs_more_than_one_cpu() {
        let base = EnvironmentSignals::new(HostPlatform::Linux);
        assert!(!resolve(&base.clone().cpus(1)).parallel);
        assert!(resolve(&base.cpus(2)).parallel);
    }

    #[test]
    fn custom_tables_flow_into_profile() {
        let tables = ResolverTables::default().with_alias("@api", "src/api");
        let resolver = ProfileResolver::new(tables);
        let profile = resolver.resolve(&EnvironmentSignals::new(HostPlatform::Linux));
        assert_eq!(profile.path_aliases["@api"], PathBuf::from("./src/api"));
    }

    #[test]
    fn production_copies_compression_table() {
        let profile = resolve(&EnvironmentSignals::new(HostPlatform::Linux).production(true));
        assert!(profile.compression.enabled);
        assert_eq!(profile.compression.filename, "[path].gz[query]");
        assert_eq!(profile.compression.threshold, 10_240);
        assert!(!profile.compression.delete_original_assets);
        assert_eq!(profile.minify.pure_funcs, ["console.log"]);
    }
}
