//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln resolve` - Print the resolved build profile
//! - `kiln check` - Validate project configuration
//! - `kiln route` - Show where the dev server forwards a request path

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, ResolveArgs, RouteArgs, SignalArgs};
pub use enums::*;
pub use validation::parse_bool;

/// Kiln - build-profile resolver for Vue CLI style projects
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve front-end build profiles",
    long_about = "Kiln derives a complete build profile (CDN externals, path aliases,\n\
                  minification, gzip, chunk groups and dev-server settings) from the\n\
                  environment and an optional kiln.toml."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
