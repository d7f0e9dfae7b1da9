//! Status message functions for terminal output.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".if_supports_color(owo_colors::Stream::Stderr, |t| t.green()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".if_supports_color(owo_colors::Stream::Stderr, |t| t.blue()), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(owo_colors::Stream::Stderr, |t| t.yellow()),
        message.if_supports_color(owo_colors::Stream::Stderr, |t| t.yellow())
    );
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "✗".if_supports_color(owo_colors::Stream::Stderr, |t| t.red()),
        message.if_supports_color(owo_colors::Stream::Stderr, |t| t.red())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        // These should not panic
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }
}
