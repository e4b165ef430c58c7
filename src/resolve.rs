//! Managed-path pattern expansion.

use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Expand a glob-style pattern into existing package directories.
///
/// Matches are kept in pattern-match order, deduplicated, and canonicalized
/// to absolute paths. Anything that is not a directory is dropped. Discovery
/// is best effort: a pattern that matches nothing, is malformed, or hits an
/// unreadable entry yields an empty (or shorter) result, never an error.
#[tracing::instrument(skip(runtime))]
pub fn resolve_pattern<R: Runtime>(runtime: &R, pattern: &str) -> Vec<PathBuf> {
    let matches = match runtime.glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            debug!("Skipping pattern {:?}: {}", pattern, e);
            return Vec::new();
        }
    };

    let mut resolved = Vec::new();
    for path in matches {
        if !runtime.is_dir(&path) {
            continue;
        }
        let path = match runtime.canonicalize(&path) {
            Ok(path) => path,
            Err(e) => {
                debug!("Skipping {:?}: {}", path, e);
                continue;
            }
        };
        if !resolved.contains(&path) {
            resolved.push(path);
        }
    }

    debug!("Pattern {:?} resolved to {} path(s)", pattern, resolved.len());
    resolved
}
