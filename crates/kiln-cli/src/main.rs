//! Kiln CLI - resolve front-end build profiles.
//!
//! This is the main entry point for the Kiln CLI. It handles command-line argument
//! parsing, logging initialization, and command dispatch.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Logging defaults may come from the project's [settings] table
    let settings = commands::utils::peek_settings(args.command.config_args());
    logger::init_logger(args.verbose, args.quiet, args.no_color, &settings);
    ui::init_colors(args.no_color);

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Route(route_args) => commands::route_execute(route_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
