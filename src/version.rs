//! Version detection for local working copies.
//!
//! A managed directory identifies itself to the resolver through a small
//! marker file instead of VCS metadata. The marker holds a plain version
//! string; without one the directory is treated as an unversioned local
//! copy and reported as [`DEV_VERSION`].

use anyhow::Result;
use std::path::Path;

use crate::runtime::Runtime;

/// Marker filenames, checked in priority order.
pub const MARKER_FILES: [&str; 2] = [".studio.version", "studio.version"];

/// Version reported for a local copy that carries no marker file.
pub const DEV_VERSION: &str = "dev-studio";

/// A guessed version for a managed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessedVersion {
    pub version: String,
    pub pretty_version: String,
}

impl GuessedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        GuessedVersion {
            pretty_version: version.clone(),
            version,
        }
    }
}

/// Version-detection strategy for a path-backed package source.
///
/// This is the injection point a [`crate::host::PathRepository`] is built
/// with, so the marker-file convention replaces the host's normal
/// VCS-metadata version detection.
#[cfg_attr(test, mockall::automock)]
pub trait VersionStrategy: Send + Sync {
    fn guess_version(&self, runtime: &dyn Runtime, path: &Path) -> Result<GuessedVersion>;
}

/// Reads the version from the first marker file found in `path`.
///
/// Falls back to [`DEV_VERSION`] when no marker exists. A marker that exists
/// but cannot be read is an error; a missing marker is the normal case.
pub struct MarkerVersionStrategy;

impl VersionStrategy for MarkerVersionStrategy {
    #[tracing::instrument(skip(self, runtime))]
    fn guess_version(&self, runtime: &dyn Runtime, path: &Path) -> Result<GuessedVersion> {
        for filename in MARKER_FILES {
            let marker = path.join(filename);
            if runtime.exists(&marker) {
                let raw = runtime.read_to_string(&marker)?;
                return Ok(GuessedVersion::new(raw.trim()));
            }
        }
        Ok(GuessedVersion::new(DEV_VERSION))
    }
}
