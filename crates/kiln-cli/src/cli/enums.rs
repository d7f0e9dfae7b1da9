use clap::ValueEnum;

/// Output format for the resolved profile
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON, consumed by the build tool's config wrapper
    #[default]
    #[value(name = "json")]
    Json,

    /// TOML, for reading or pasting back into kiln.toml
    #[value(name = "toml")]
    Toml,
}
