use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::package::{ManagedPackage, build_managed_package};
use crate::runtime::Runtime;
use crate::version::VersionStrategy;

/// Repository type for local-directory sources.
pub const REPOSITORY_TYPE_PATH: &str = "path";

/// A declared repository: what ends up in the project's configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepositoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: PathBuf,
    pub options: RepositoryOptions,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepositoryOptions {
    pub symlink: bool,
}

impl RepositoryEntry {
    /// A path-type entry, materialized by symlink.
    pub fn path(name: &str, url: &Path) -> Self {
        RepositoryEntry {
            name: name.to_string(),
            kind: REPOSITORY_TYPE_PATH.to_string(),
            url: url.to_path_buf(),
            options: RepositoryOptions { symlink: true },
        }
    }
}

/// A live path-type source the resolver can query.
///
/// Version detection is injected: the repository reports whatever the given
/// [`VersionStrategy`] says, so the host's VCS-metadata guessing is bypassed.
pub struct PathRepository {
    entry: RepositoryEntry,
    version_strategy: Box<dyn VersionStrategy>,
}

impl PathRepository {
    pub fn new(entry: RepositoryEntry, version_strategy: Box<dyn VersionStrategy>) -> Self {
        PathRepository {
            entry,
            version_strategy,
        }
    }

    pub fn entry(&self) -> &RepositoryEntry {
        &self.entry
    }

    /// Load the package this repository provides, versioned by the injected
    /// strategy. `Ok(None)` when the directory holds no package.
    pub fn load_package<R: Runtime>(
        &self,
        runtime: &R,
        root_name: &str,
    ) -> Result<Option<ManagedPackage>> {
        build_managed_package(
            runtime,
            &self.entry.url,
            self.version_strategy.as_ref(),
            root_name,
        )
    }
}

/// The resolver's repository search order.
///
/// Only the mutation this extension needs is exposed: prepending a path
/// repository ahead of whatever sources the host already consults.
#[derive(Default)]
pub struct RepositoryManager {
    repositories: Vec<PathRepository>,
}

impl RepositoryManager {
    pub fn new() -> Self {
        RepositoryManager::default()
    }

    /// Register a repository with highest priority.
    pub fn prepend_repository(&mut self, repository: PathRepository) {
        self.repositories.insert(0, repository);
    }

    /// Repositories in search order, highest priority first.
    pub fn repositories(&self) -> &[PathRepository] {
        &self.repositories
    }
}
