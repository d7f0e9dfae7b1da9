//! Logging infrastructure for the Kiln CLI.
//!
//! Logs go to stderr through `tracing-subscriber`, leaving stdout for command
//! output so `kiln resolve > profile.json` works.
//!
//! # Verbosity
//!
//! The filter is picked in this order:
//! 1. `--verbose`: debug for kiln crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. `log_level` from the config's `[settings]` table
//! 5. info for kiln crates
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::logger::init_logger;
//! use kiln_config::GlobalSettings;
//! use tracing::info;
//!
//! init_logger(false, false, false, &GlobalSettings::default());
//!
//! info!("resolving profile");
//! ```

use kiln_config::GlobalSettings;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "kiln=debug,kiln_cli=debug,kiln_config=debug";
const QUIET_FILTER: &str = "kiln=error,kiln_cli=error,kiln_config=error";
const DEFAULT_FILTER: &str = "kiln=info,kiln_cli=info,kiln_config=info";

/// Initialize the global tracing subscriber.
///
/// Must be called once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, settings: &GlobalSettings) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(verbose, quiet, rust_log.as_deref(), settings);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors());

    let registry = tracing_subscriber::registry().with(filter);
    if settings.log_format.as_deref() == Some("full") {
        registry.with(fmt_layer).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}

/// Filter directives for the given flags, `RUST_LOG` value and settings.
///
/// A bare level such as `debug` in `[settings] log_level` applies to the kiln
/// crates only; anything containing `=` or `,` is passed through untouched.
pub fn filter_directives(
    verbose: bool,
    quiet: bool,
    rust_log: Option<&str>,
    settings: &GlobalSettings,
) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    if quiet {
        return QUIET_FILTER.to_string();
    }
    if let Some(env) = rust_log.map(str::trim).filter(|env| !env.is_empty()) {
        return env.to_string();
    }

    match settings.log_level.as_deref().map(str::trim) {
        Some(level) if level.contains('=') || level.contains(',') => level.to_string(),
        Some(level) if !level.is_empty() => {
            format!("kiln={level},kiln_cli={level},kiln_config={level}")
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Check if colored log output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise colors
/// follow whether stderr is a color-capable terminal.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
