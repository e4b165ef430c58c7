use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::config::Config;
use crate::runtime::Runtime;

use super::config_path;

/// Start managing a path pattern.
#[tracing::instrument(skip(runtime, file))]
pub fn manage<R: Runtime>(runtime: R, pattern: &str, file: Option<PathBuf>) -> Result<()> {
    let path = config_path(&runtime, file)?;
    debug!("Using configuration at {:?}", path);

    let mut config = Config::load(&runtime, &path)?;
    if config.add_pattern(pattern) {
        config.save(&runtime, &path)?;
        println!("Managing {pattern}");
    } else {
        println!("{pattern} is already managed");
    }

    Ok(())
}

/// Stop managing a path pattern.
#[tracing::instrument(skip(runtime, file))]
pub fn unmanage<R: Runtime>(runtime: R, pattern: &str, file: Option<PathBuf>) -> Result<()> {
    let path = config_path(&runtime, file)?;
    debug!("Using configuration at {:?}", path);

    let mut config = Config::load(&runtime, &path)?;
    if config.remove_pattern(pattern) {
        config.save(&runtime, &path)?;
        println!("Stopped managing {pattern}");
    } else {
        println!("{pattern} is not managed");
    }

    Ok(())
}
