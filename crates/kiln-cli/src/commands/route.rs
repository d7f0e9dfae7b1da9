//! Route command implementation.
//!
//! Answers "where does the dev server send this request?".

use tracing::{debug, info};

use crate::cli::RouteArgs;
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

/// Execute the route command.
///
/// Prints the upstream URL for proxied paths. Paths no rule matches are
/// served by the dev server itself, which is reported on stderr.
pub fn execute(args: RouteArgs) -> Result<()> {
    let project = Project::from_args(&args.config)?;
    let config = project.load_config(&args.config, false)?;
    let signals = project.signals(&args.signals);
    let dev_server = config.resolver().resolve(&signals).dev_server;

    match dev_server.route(&args.path) {
        Some(rule) => {
            debug!(prefix = %rule.path_prefix, target = %rule.target, "matched proxy rule");
            if let Some(origin) = rule.upstream_origin() {
                info!(%origin, "origin header rewritten");
            }
            if let Some(url) = rule.forward(&args.path) {
                println!("{url}");
            }
        }
        None => ui::warning(&format!(
            "{} is served by the dev server at {}",
            args.path,
            dev_server.address()
        )),
    }

    Ok(())
}
