use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::config::Config;
use crate::package::build_managed_package;
use crate::resolve::resolve_pattern;
use crate::runtime::Runtime;
use crate::version::MarkerVersionStrategy;

use super::config_path;

/// List managed path patterns and the packages they resolve to.
#[tracing::instrument(skip(runtime, file))]
pub fn list<R: Runtime>(runtime: R, file: Option<PathBuf>) -> Result<()> {
    let path = config_path(&runtime, file)?;
    let config = Config::load(&runtime, &path)?;

    if config.path_patterns.is_empty() {
        println!("No managed paths.");
        return Ok(());
    }

    for pattern in &config.path_patterns {
        println!("{pattern}");
        let dirs = resolve_pattern(&runtime, pattern);
        debug!("Pattern {:?} matched {} directory(ies)", pattern, dirs.len());

        for dir in dirs {
            // Listing has no host project to exclude.
            match build_managed_package(&runtime, &dir, &MarkerVersionStrategy, "")? {
                Some(package) => {
                    println!("  {} {} ({})", package.name, package.pretty_version, dir.display());
                }
                None => {
                    println!("  {} (no package manifest)", dir.display());
                }
            }
        }
    }

    Ok(())
}
