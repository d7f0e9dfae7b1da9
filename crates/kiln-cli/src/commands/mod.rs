//! Command implementations for the Kiln CLI.
//!
//! - [`resolve`] - Print the resolved build profile
//! - [`check`] - Configuration validation
//! - [`route`] - Dev-server proxy lookup
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod resolve;
pub mod route;
pub mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
pub use route::execute as route_execute;
