//! Properties of profile resolution across signal combinations.

use kiln_config::{
    ChunkGroupKind, CompressionAlgorithm, CompressionOptions, EnvironmentSignals, HostPlatform,
    MinifyOptions, resolve,
};
use proptest::prelude::*;

fn platform_strategy() -> impl Strategy<Value = HostPlatform> {
    prop_oneof![
        Just(HostPlatform::Darwin),
        Just(HostPlatform::Linux),
        Just(HostPlatform::Windows),
        "[a-z]{3,8}".prop_map(|name| HostPlatform::from(name.as_str())),
    ]
}

prop_compose! {
    fn signals_strategy()(
        is_production in any::<bool>(),
        use_cdn_locally in any::<bool>(),
        platform in platform_strategy(),
        cpu_count in 1usize..128,
    ) -> EnvironmentSignals {
        EnvironmentSignals::new(platform)
            .production(is_production)
            .cdn_locally(use_cdn_locally)
            .cpus(cpu_count)
    }
}

proptest! {
    #[test]
    fn resolution_is_deterministic(signals in signals_strategy()) {
        prop_assert_eq!(resolve(&signals), resolve(&signals.clone()));
    }

    #[test]
    fn exactly_one_proxy_rule_to_local_backend(signals in signals_strategy()) {
        let profile = resolve(&signals);
        prop_assert_eq!(profile.dev_server.proxy.len(), 1);
        prop_assert_eq!(profile.dev_server.proxy[0].target.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn open_iff_mac(signals in signals_strategy()) {
        let profile = resolve(&signals);
        prop_assert_eq!(profile.dev_server.open, signals.platform == HostPlatform::Darwin);
    }

    #[test]
    fn externals_follow_cdn_activation(signals in signals_strategy()) {
        let profile = resolve(&signals);
        let active = signals.is_production || signals.use_cdn_locally;
        prop_assert_eq!(!profile.external_modules.is_empty(), active);
        prop_assert_eq!(!profile.cdn_assets.js.is_empty(), active);
        prop_assert_eq!(profile.inject_cdn_into_html, active);
    }

    #[test]
    fn dev_server_fixed_fields(signals in signals_strategy()) {
        let profile = resolve(&signals);
        prop_assert_eq!(profile.dev_server.host.as_str(), "0.0.0.0");
        prop_assert_eq!(profile.dev_server.port, 8080);
        prop_assert!(!profile.dev_server.https);
    }
}

#[test]
fn plain_development_has_no_externals_or_optimizations() {
    let signals = EnvironmentSignals::new(HostPlatform::Linux);
    let profile = resolve(&signals);

    assert!(profile.external_modules.is_empty());
    assert!(profile.cdn_assets.is_empty());
    assert_eq!(profile.minify, MinifyOptions::default());
    assert_eq!(profile.compression, CompressionOptions::default());
    assert!(profile.chunk_groups.is_empty());
}

#[test]
fn cdn_locally_populates_externals_in_development() {
    let signals = EnvironmentSignals::new(HostPlatform::Linux).cdn_locally(true);
    let profile = resolve(&signals);

    assert_eq!(profile.external_modules.len(), 3);
    assert_eq!(profile.external_modules["vue"], "Vue");
    assert_eq!(profile.external_modules["vuex"], "Vuex");
    assert_eq!(profile.external_modules["vue-router"], "VueRouter");
    assert!(profile.is_external("vue-router"));
    assert!(!profile.is_external("axios"));
    assert!(profile.inject_cdn_into_html);
    assert!(!profile.minify.enabled);
}

#[test]
fn production_enables_minify_and_gzip() {
    let signals = EnvironmentSignals::new(HostPlatform::Linux).production(true);
    let profile = resolve(&signals);

    assert!(profile.minify.enabled);
    assert!(profile.minify.strip_console);
    assert!(profile.minify.strip_debugger);
    assert!(profile.minify.parallel);
    assert!(!profile.minify.source_map);

    assert!(profile.compression.enabled);
    assert_eq!(profile.compression.algorithm, CompressionAlgorithm::Gzip);
    assert_eq!(profile.compression.threshold, 10_240);
    assert_eq!(profile.compression.min_ratio, 0.8);
    assert_eq!(profile.compression.extensions, ["html", "js", "css"]);
}

#[test]
fn production_chunk_groups_in_order() {
    let signals = EnvironmentSignals::new(HostPlatform::Linux).production(true);
    let profile = resolve(&signals);

    let names: Vec<&str> = profile
        .chunk_groups
        .iter()
        .map(|group| group.name.as_str())
        .collect();
    assert_eq!(names, ["manifest", "vendor", "common", "styles"]);

    let manifest = profile.chunk_group("manifest").unwrap();
    assert_eq!(manifest.kind, ChunkGroupKind::Runtime);

    let vendor = profile.chunk_group("vendor").unwrap();
    assert_eq!(vendor.priority, Some(100));
    assert_eq!(vendor.min_chunks, Some(1));

    let common = profile.chunk_group("common").unwrap();
    assert_eq!(common.priority, Some(60));
    assert_eq!(common.min_chunks, Some(2));

    let styles = profile.chunk_group("styles").unwrap();
    assert!(styles.enforce);
}

#[test]
fn modules_land_in_highest_priority_group() {
    let signals = EnvironmentSignals::new(HostPlatform::Linux).production(true);
    let profile = resolve(&signals);

    let group = |path: &str| profile.chunk_group_for(path).map(|g| g.name.as_str());
    assert_eq!(group("/app/node_modules/lodash/lodash.js"), Some("vendor"));
    // vendor outranks common when both match
    assert_eq!(group("/app/node_modules/x/src/js/y.js"), Some("vendor"));
    assert_eq!(group("/app/src/js/format.js"), Some("common"));
    assert_eq!(group("/app/src/styles/app.scss"), Some("styles"));
    assert_eq!(group("/app/src/main.js"), None);
}

#[test]
fn proxy_preserves_request_path() {
    let profile = resolve(&EnvironmentSignals::new(HostPlatform::Windows));
    let rule = &profile.dev_server.proxy[0];

    assert_eq!(rule.path_prefix, "/gxyundata");
    assert!(rule.change_origin);
    assert_eq!(
        profile.dev_server.forward("/gxyundata/stats/2019").as_deref(),
        Some("http://localhost:3000/gxyundata/stats/2019")
    );
    assert!(profile.dev_server.forward("/static/app.js").is_none());
}

#[test]
fn supplementary_settings_are_fixed() {
    let profile = resolve(&EnvironmentSignals::new(HostPlatform::Linux));

    assert_eq!(profile.output_dir, std::path::PathBuf::from("/dist"));
    assert!(profile.lint_on_save);
    assert!(profile.production_source_map);
    assert!(!profile.css.extract);
    assert!(!profile.css.source_map);
    assert!(!profile.css.modules);
    assert_eq!(profile.thread_pool.threads, 3);
    assert!(profile.thread_pool.cache);
    assert_eq!(
        profile.thread_pool.loaders,
        ["babel-loader", "vue-loader", "url-loader"]
    );
    assert_eq!(profile.entry_polyfills["main"], ["babel-polyfill"]);
    assert_eq!(profile.image_optimization.loader, "image-webpack-loader");
    assert!(profile.image_optimization.bypass_on_debug);
}

#[test]
fn profile_serializes_to_json() {
    let signals = EnvironmentSignals::new(HostPlatform::Darwin).production(true);
    let value = resolve(&signals).to_value().unwrap();

    assert_eq!(value["external_modules"]["vue"], "Vue");
    assert_eq!(value["compression"]["algorithm"], "gzip");
    assert_eq!(value["chunk_groups"][0]["kind"], "runtime");
    assert_eq!(value["dev_server"]["open"], true);
}
