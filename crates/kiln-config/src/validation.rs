//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::tables::ResolverTables;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate resolver tables
    fn validate(&self, tables: &ResolverTables) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{ConfigValidator, ResolverTables, SchemaValidator};
///
/// SchemaValidator.validate(&ResolverTables::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, tables: &ResolverTables) -> Result<()> {
        // Externals: module specifiers and the globals they map to
        for (module, global) in &tables.cdn.externals {
            if module.trim().is_empty() {
                return Err(ConfigError::schema(
                    "external module names cannot be empty",
                    "Remove empty keys from 'cdn.externals'",
                ));
            }
            if let Err(message) = check_global_name(global) {
                return Err(ConfigError::schema(
                    format!("external '{module}': {message}"),
                    "Use the variable name the CDN script defines on window",
                ));
            }
        }

        for url in tables.cdn.css.iter().chain(&tables.cdn.js) {
            if !is_http_url(url) {
                return Err(ConfigError::schema(
                    format!("CDN link '{url}' is not an http(s) URL"),
                    "CDN links must start with http:// or https://",
                ));
            }
        }

        for (alias, dir) in &tables.aliases {
            if alias.trim().is_empty() || dir.as_os_str().is_empty() {
                return Err(ConfigError::schema(
                    "path aliases need a name and a directory",
                    "Remove empty entries from 'aliases'",
                ));
            }
        }

        // Compression
        let compression = &tables.compression;
        if !(compression.min_ratio > 0.0 && compression.min_ratio <= 1.0) {
            return Err(ConfigError::schema(
                format!(
                    "compression min_ratio {} is outside (0, 1]",
                    compression.min_ratio
                ),
                "min_ratio is compressed size / original size, e.g. 0.8",
            ));
        }
        if compression.extensions.is_empty()
            || compression.extensions.iter().any(|ext| ext.trim().is_empty())
        {
            return Err(ConfigError::schema(
                "compression needs at least one non-empty extension",
                "List extensions without the dot, e.g. [\"html\", \"js\", \"css\"]",
            ));
        }

        // Chunk groups
        for group in &tables.chunk_groups {
            if group.name.trim().is_empty() {
                return Err(ConfigError::schema(
                    "chunk group names cannot be empty",
                    "Give every chunk group a name",
                ));
            }
            if let Some(Err(err)) = group.pattern() {
                return Err(ConfigError::schema(
                    format!("chunk group '{}' has an invalid test pattern: {err}", group.name),
                    "Patterns use regular expression syntax",
                ));
            }
        }

        if tables.thread_pool.threads == 0 {
            return Err(ConfigError::schema(
                "thread_pool.threads must be at least 1",
                "Set threads to a positive number",
            ));
        }

        // Dev server
        let dev = &tables.dev_server;
        if dev.port == 0 {
            return Err(ConfigError::schema(
                "dev_server.port cannot be 0",
                "Pick a port between 1 and 65535",
            ));
        }
        for rule in &dev.proxy {
            if !rule.path_prefix.starts_with('/') {
                return Err(ConfigError::schema(
                    format!("proxy prefix '{}' must start with '/'", rule.path_prefix),
                    "Proxy prefixes are request paths, e.g. /api",
                ));
            }
            if !is_http_url(&rule.target) {
                return Err(ConfigError::schema(
                    format!("proxy target '{}' is not an http(s) URL", rule.target),
                    "Targets look like http://localhost:3000/",
                ));
            }
            if let Some(pattern) = &rule.rewrite_from {
                if let Err(err) = Regex::new(pattern) {
                    return Err(ConfigError::schema(
                        format!("proxy rewrite for '{}' does not compile: {err}", rule.path_prefix),
                        "Rewrites use regular expression syntax, e.g. ^/api",
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that alias directories exist under the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, tables: &ResolverTables) -> Result<()> {
        SchemaValidator.validate(tables)?;

        for (alias, dir) in &tables.aliases {
            let path = self.root.join(dir);
            if !path.is_dir() {
                return Err(ConfigError::AliasDirNotFound {
                    alias: alias.clone(),
                    path,
                });
            }
        }

        Ok(())
    }
}

/// Checks that `name` is a JavaScript identifier or a dotted path of them.
///
/// Each segment must start with a letter, underscore, or dollar sign and
/// continue with letters, digits, underscores, or dollar signs, so both
/// `Vue` and `window.Vue` pass.
pub fn check_global_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("global name cannot be empty".to_string());
    }
    for segment in name.split('.') {
        check_identifier(segment, name)?;
    }
    Ok(())
}

fn check_identifier(segment: &str, name: &str) -> std::result::Result<(), String> {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return Err(format!("global name has an empty segment: '{name}'"));
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(format!(
            "global name must start with a letter, underscore, or dollar sign: '{name}'"
        ));
    }

    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err(format!(
            "global name can only contain letters, numbers, underscores, or dollar signs: '{name}'"
        ));
    }

    Ok(())
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty())
}

/// Convenience function for schema-only validation
pub fn validate_schema(tables: &ResolverTables) -> Result<()> {
    SchemaValidator.validate(tables)
}

/// Convenience function for filesystem validation
///
/// # Example
///
/// ```no_run
/// use kiln_config::{ResolverTables, validate_fs};
///
/// validate_fs(&ResolverTables::default(), ".").unwrap();
/// ```
pub fn validate_fs(tables: &ResolverTables, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(tables)
}
