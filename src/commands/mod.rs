//! Command layer for the companion CLI.
//!
//! The CLI maintains the `studio.json` the extension consumes: `manage` and
//! `unmanage` edit the pattern list, `list` shows what the patterns resolve
//! to right now.

use anyhow::Result;
use std::path::PathBuf;

mod list;
mod manage;

pub use list::list;
pub use manage::{manage, unmanage};

use crate::config::CONFIG_FILE;
use crate::runtime::Runtime;

fn config_path<R: Runtime>(runtime: &R, file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(runtime.current_dir()?.join(CONFIG_FILE)),
    }
}
