//! Build-profile resolution for Vue CLI style front-end builds.
//!
//! A [`BuildProfile`] is computed once per build invocation from a handful of
//! [`EnvironmentSignals`] and a set of [`ResolverTables`]. Project files
//! (`kiln.toml` or `package.json#kiln`) can override the tables.

pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod profile;
pub mod resolver;
pub mod settings;
pub mod signals;
pub mod tables;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use profile::*;
pub use resolver::{ProfileResolver, resolve};
pub use settings::*;
pub use signals::*;
pub use tables::*;

// Re-export discovery, loading and validation
pub use discovery::{ConfigDiscovery, ConfigSource, discover, discover_with_profile};
pub use loader::ConfigLoader;
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, check_global_name, validate_fs,
    validate_schema,
};
