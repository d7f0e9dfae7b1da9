use serde::{Deserialize, Serialize};

/// CDN links injected into the HTML template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CdnAssets {
    #[serde(default)]
    pub css: Vec<String>,

    #[serde(default)]
    pub js: Vec<String>,
}

impl CdnAssets {
    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.js.is_empty()
    }
}

/// Stylesheet handling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CssOptions {
    /// Extract CSS into separate files instead of injecting it
    #[serde(default)]
    pub extract: bool,

    #[serde(default)]
    pub source_map: bool,

    /// Treat every stylesheet as a CSS module
    #[serde(default)]
    pub modules: bool,
}

/// Parameters for the build tool's loader worker pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadPoolOptions {
    pub loaders: Vec<String>,

    #[serde(default)]
    pub cache: bool,

    pub threads: usize,
}

impl Default for ThreadPoolOptions {
    fn default() -> Self {
        Self {
            loaders: vec![
                "babel-loader".to_string(),
                "vue-loader".to_string(),
                "url-loader".to_string(),
            ],
            cache: true,
            threads: 3,
        }
    }
}

/// Image compression loader attached to a module rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOptimization {
    pub rule: String,

    pub loader: String,

    /// Skip optimization in debug builds
    #[serde(default)]
    pub bypass_on_debug: bool,
}

impl Default for ImageOptimization {
    fn default() -> Self {
        Self {
            rule: "images".to_string(),
            loader: "image-webpack-loader".to_string(),
            bypass_on_debug: true,
        }
    }
}
