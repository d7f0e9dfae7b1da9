//! Kiln CLI - resolve and inspect front-end build profiles.
//!
//! This crate provides the command-line interface over `kiln-config`: it reads
//! environment signals and the project's `kiln.toml`, prints the resolved
//! build profile, validates configuration, and explains dev-server proxying.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - Individual CLI command implementations
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
