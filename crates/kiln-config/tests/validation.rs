//! Tests for configuration validation.

use kiln_config::{
    ChunkGroup, ConfigError, ConfigValidator, FsValidator, ProxyRule, ResolverTables,
    SchemaValidator,
};
use std::fs;
use tempfile::TempDir;

fn assert_schema_error(tables: &ResolverTables) {
    let result = SchemaValidator.validate(tables);
    assert!(
        matches!(result, Err(ConfigError::SchemaValidation { .. })),
        "expected schema error, got {result:?}"
    );
}

#[test]
fn rejects_invalid_global_name() {
    let tables = ResolverTables::default().with_external(
        "vue-router",
        "vue-router",
        "https://cdn.staticfile.org/vue-router/3.0.3/vue-router.min.js",
    );
    assert_schema_error(&tables);
}

#[test]
fn accepts_dotted_global_name() {
    let tables = ResolverTables::default().with_external(
        "element-ui",
        "window.ELEMENT",
        "https://cdn.staticfile.org/element-ui/2.12.0/index.js",
    );
    assert!(SchemaValidator.validate(&tables).is_ok());
}

#[test]
fn rejects_protocol_relative_cdn_link() {
    let mut tables = ResolverTables::default();
    tables.cdn.css.push("//cdn.example.com/theme.css".into());
    assert_schema_error(&tables);
}

#[test]
fn rejects_min_ratio_out_of_range() {
    let mut tables = ResolverTables::default();
    tables.compression.min_ratio = 0.0;
    assert_schema_error(&tables);

    tables.compression.min_ratio = 1.5;
    assert_schema_error(&tables);

    tables.compression.min_ratio = 1.0;
    assert!(SchemaValidator.validate(&tables).is_ok());
}

#[test]
fn rejects_empty_compression_extensions() {
    let mut tables = ResolverTables::default();
    tables.compression.extensions.clear();
    assert_schema_error(&tables);
}

#[test]
fn rejects_bad_chunk_pattern() {
    let mut tables = ResolverTables::default();
    tables
        .chunk_groups
        .push(ChunkGroup::cache_group("broken").with_test("[unclosed"));
    assert_schema_error(&tables);
}

#[test]
fn rejects_zero_threads_and_port() {
    let mut tables = ResolverTables::default();
    tables.thread_pool.threads = 0;
    assert_schema_error(&tables);

    let mut tables = ResolverTables::default();
    tables.dev_server.port = 0;
    assert_schema_error(&tables);
}

#[test]
fn rejects_relative_proxy_prefix_and_bad_target() {
    let mut tables = ResolverTables::default();
    tables
        .dev_server
        .proxy
        .push(ProxyRule::preserving("api", "http://localhost:5000"));
    assert_schema_error(&tables);

    let mut tables = ResolverTables::default();
    tables
        .dev_server
        .proxy
        .push(ProxyRule::preserving("/api", "localhost:5000"));
    assert_schema_error(&tables);
}

#[test]
fn fs_validator_reports_missing_alias_dir() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("src")).expect("create src");

    let result = FsValidator::new(dir.path()).validate(&ResolverTables::default());
    match result.unwrap_err() {
        ConfigError::AliasDirNotFound { alias, path } => {
            assert_eq!(alias, "components");
            assert!(path.ends_with("src/components"));
        }
        other => panic!("expected AliasDirNotFound, got {other:?}"),
    }
}

#[test]
fn fs_validator_accepts_full_layout() {
    let dir = TempDir::new().expect("tempdir");
    for sub in ["components", "views", "assets", "common"] {
        fs::create_dir_all(dir.path().join("src").join(sub)).expect("create dir");
    }

    assert!(FsValidator::new(dir.path())
        .validate(&ResolverTables::default())
        .is_ok());
}
