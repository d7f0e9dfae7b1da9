use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::{parse_bool, parse_request_path};

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build profile
    ///
    /// Reads NODE_ENV and KILN_* environment variables plus the project's
    /// kiln.toml, then prints the profile the build tool should use.
    Resolve(ResolveArgs),

    /// Validate configuration
    ///
    /// Loads kiln.toml (or package.json#kiln), applies the selected profile
    /// and checks the tables for mistakes.
    Check(CheckArgs),

    /// Show where the dev server forwards a request path
    Route(RouteArgs),
}

impl Command {
    /// Where the command reads its configuration from.
    pub fn config_args(&self) -> &ConfigArgs {
        match self {
            Command::Resolve(args) => &args.config,
            Command::Check(args) => &args.config,
            Command::Route(args) => &args.config,
        }
    }
}

/// Where configuration is read from
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Project root; aliases resolve against it and kiln.toml is searched there
    ///
    /// Left at `.`, KILN_ROOT takes over when set.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Config file to load instead of searching the root
    ///
    /// Either a TOML file or a package.json with a "kiln" field.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile from the config's [profiles] table to apply
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,
}

/// Overrides for environment signals
///
/// Anything not given here comes from NODE_ENV and KILN_* variables.
#[derive(Args, Debug, Clone, Default)]
pub struct SignalArgs {
    /// Resolve for production regardless of NODE_ENV
    #[arg(long, conflicts_with = "development")]
    pub production: bool,

    /// Resolve for development regardless of NODE_ENV
    #[arg(long)]
    pub development: bool,

    /// Load externalized dependencies from the CDN during development
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    pub cdn_local: Option<bool>,

    /// Host platform (darwin, linux, win32)
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Logical CPU count of the build host
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub cpus: Option<u16>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub signals: SignalArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Also check that alias directories exist on disk
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the route command
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Request path, e.g. /gxyundata/list?page=1
    #[arg(value_name = "PATH", value_parser = parse_request_path)]
    pub path: String,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub signals: SignalArgs,
}
