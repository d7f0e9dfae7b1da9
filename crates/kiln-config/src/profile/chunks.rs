use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which chunks a cache group may select modules from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    #[default]
    All,
    Async,
    Initial,
}

/// How the group participates in splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkGroupKind {
    /// A `splitChunks` cache group selecting modules by pattern
    #[default]
    CacheGroup,
    /// The runtime chunk holding the module manifest
    Runtime,
}

/// A named bucket of bundled output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkGroup {
    pub name: String,

    #[serde(default)]
    pub kind: ChunkGroupKind,

    /// Regex over module paths, in JavaScript `RegExp` syntax
    #[serde(default)]
    pub test: Option<String>,

    #[serde(default)]
    pub chunks: Option<ChunkSelection>,

    #[serde(default)]
    pub priority: Option<i32>,

    #[serde(default)]
    pub min_chunks: Option<u32>,

    #[serde(default)]
    pub max_initial_requests: Option<u32>,

    #[serde(default)]
    pub min_size: Option<u64>,

    /// Ignore size and request limits when creating this chunk
    #[serde(default)]
    pub enforce: bool,
}

impl ChunkGroup {
    /// Empty cache group named `name`.
    pub fn cache_group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChunkGroupKind::CacheGroup,
            test: None,
            chunks: None,
            priority: None,
            min_chunks: None,
            max_initial_requests: None,
            min_size: None,
            enforce: false,
        }
    }

    /// Runtime chunk named `name`.
    pub fn runtime(name: impl Into<String>) -> Self {
        Self {
            kind: ChunkGroupKind::Runtime,
            ..Self::cache_group(name)
        }
    }

    pub fn with_test(mut self, pattern: impl Into<String>) -> Self {
        self.test = Some(pattern.into());
        self
    }

    pub fn with_chunks(mut self, chunks: ChunkSelection) -> Self {
        self.chunks = Some(chunks);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_min_chunks(mut self, min_chunks: u32) -> Self {
        self.min_chunks = Some(min_chunks);
        self
    }

    pub fn with_max_initial_requests(mut self, max: u32) -> Self {
        self.max_initial_requests = Some(max);
        self
    }

    pub fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn enforced(mut self) -> Self {
        self.enforce = true;
        self
    }

    /// Compile the `test` pattern, if any.
    pub fn pattern(&self) -> Option<Result<Regex, regex::Error>> {
        self.test.as_deref().map(Regex::new)
    }

    /// Whether a module at `module_path` falls into this group.
    ///
    /// Runtime groups and groups without a pattern select nothing. A pattern
    /// that does not compile selects nothing either; validation reports it.
    pub fn matches(&self, module_path: &str) -> bool {
        if self.kind == ChunkGroupKind::Runtime {
            return false;
        }
        match self.pattern() {
            Some(Ok(re)) => re.is_match(module_path),
            _ => false,
        }
    }
}

/// The production split: runtime manifest, vendor, common and styles.
pub(crate) fn default_chunk_groups() -> Vec<ChunkGroup> {
    vec![
        ChunkGroup::runtime("manifest"),
        ChunkGroup::cache_group("vendor")
            .with_chunks(ChunkSelection::All)
            .with_test("node_modules")
            .with_min_chunks(1)
            .with_max_initial_requests(5)
            .with_min_size(0)
            .with_priority(100),
        ChunkGroup::cache_group("common")
            .with_chunks(ChunkSelection::All)
            .with_test(r"[\\/]src[\\/]js[\\/]")
            .with_min_chunks(2)
            .with_max_initial_requests(5)
            .with_min_size(0)
            .with_priority(60),
        ChunkGroup::cache_group("styles")
            .with_test(r"\.(sa|sc|c)ss$")
            .with_chunks(ChunkSelection::All)
            .enforced(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> ChunkGroup {
        default_chunk_groups()
            .into_iter()
            .find(|g| g.name == name)
            .unwrap()
    }

    #[test]
    fn vendor_matches_node_modules() {
        let vendor = group("vendor");
        assert!(vendor.matches("/app/node_modules/vue/dist/vue.js"));
        assert!(!vendor.matches("/app/src/main.js"));
    }

    #[test]
    fn common_matches_either_separator() {
        let common = group("common");
        assert!(common.matches("/app/src/js/util.js"));
        assert!(common.matches(r"C:\app\src\js\util.js"));
        assert!(!common.matches("/app/src/views/Home.vue"));
    }

    #[test]
    fn styles_match_sass_scss_and_css() {
        let styles = group("styles");
        assert!(styles.matches("theme.sass"));
        assert!(styles.matches("theme.scss"));
        assert!(styles.matches("theme.css"));
        assert!(!styles.matches("theme.less"));
        assert!(!styles.matches("theme.css.map"));
    }

    #[test]
    fn runtime_group_selects_nothing() {
        let manifest = group("manifest");
        assert_eq!(manifest.kind, ChunkGroupKind::Runtime);
        assert!(!manifest.matches("/app/node_modules/vue/dist/vue.js"));
    }

    #[test]
    fn invalid_pattern_selects_nothing() {
        let broken = ChunkGroup::cache_group("broken").with_test("(");
        assert!(matches!(broken.pattern(), Some(Err(_))));
        assert!(!broken.matches("anything"));
    }
}
