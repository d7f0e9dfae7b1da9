use serde::{Deserialize, Serialize};

/// Compression algorithm handed to the compression plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompressionAlgorithm {
    #[default]
    #[serde(rename = "gzip")]
    Gzip,
    #[serde(rename = "deflate")]
    Deflate,
    #[serde(rename = "brotliCompress")]
    Brotli,
}

impl CompressionAlgorithm {
    /// File suffix the compressed asset is written with.
    pub fn extension(self) -> &'static str {
        match self {
            CompressionAlgorithm::Gzip => "gz",
            CompressionAlgorithm::Deflate => "deflate",
            CompressionAlgorithm::Brotli => "br",
        }
    }
}

/// Pre-compression of emitted assets. Disabled by default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompressionOptions {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub algorithm: CompressionAlgorithm,

    /// Output name template, e.g. `[path].gz[query]`
    #[serde(default)]
    pub filename: String,

    /// Asset extensions to compress, without the dot
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Assets smaller than this many bytes are skipped
    #[serde(default)]
    pub threshold: u64,

    /// Compressed/original size ratio an asset must reach to be kept
    #[serde(default)]
    pub min_ratio: f64,

    #[serde(default)]
    pub delete_original_assets: bool,
}

impl CompressionOptions {
    /// The asset-name regex, `\.(html|js|css)$` for the default extensions.
    pub fn test_pattern(&self) -> String {
        let alternatives: Vec<String> = self
            .extensions
            .iter()
            .map(|ext| regex::escape(ext.trim_start_matches('.')))
            .collect();
        format!(r"\.({})$", alternatives.join("|"))
    }

    /// Whether `asset` is a compression candidate by name and size.
    ///
    /// Selects the same names as [`test_pattern`](Self::test_pattern).
    pub fn accepts(&self, asset: &str, size: u64) -> bool {
        if !self.enabled || size < self.threshold {
            return false;
        }
        self.extensions.iter().any(|ext| {
            let ext = ext.trim_start_matches('.');
            !ext.is_empty()
                && asset
                    .strip_suffix(ext)
                    .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    /// Whether the compressed output of `asset` would be emitted.
    pub fn should_compress(&self, asset: &str, size: u64, compressed_size: u64) -> bool {
        if !self.accepts(asset, size) || size == 0 {
            return false;
        }
        (compressed_size as f64 / size as f64) <= self.min_ratio
    }
}
