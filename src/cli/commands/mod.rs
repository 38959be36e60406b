//! CLI command handlers

pub mod config;
pub mod gpa;
pub mod report;
pub mod target;

use gradepath::config::Config;
use std::path::{Path, PathBuf};

/// Resolve the roster path: explicit argument wins, else the configured
/// default.
pub fn resolve_roster_path(arg: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    if let Some(path) = arg {
        return Ok(path.to_path_buf());
    }

    if config.paths.roster.is_empty() {
        return Err(
            "✗ No roster file given and no default configured. Pass a FILE argument or run \
             `gradepath config set roster <path>`."
                .to_string(),
        );
    }

    Ok(PathBuf::from(&config.paths.roster))
}
