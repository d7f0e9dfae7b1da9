//! Terminal status messages.
//!
//! Status lines go to stderr so stdout only carries command output (the
//! resolved profile, a forwarded URL) and can be piped.
//!
//! # Examples
//!
//! ```no_run
//! use kiln_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Configuration is valid");
//! ui::warning("No kiln.toml found, using defaults");
//! ```

mod messages;

pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Check if stderr is a terminal
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Should be called early in main. `--no-color` wins over everything else.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
