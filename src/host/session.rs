use std::path::PathBuf;

use crate::host::{RepositoryEntry, RepositoryManager};

/// The host project's own package.
#[derive(Debug, Clone, PartialEq)]
pub struct RootPackage {
    pub name: String,
    /// Directory holding the project's manifest and `studio.json`.
    pub target_dir: PathBuf,
    /// Repositories the project declares, mirrored here so downstream
    /// tooling that inspects the configuration stays consistent.
    pub repositories: Vec<RepositoryEntry>,
}

impl RootPackage {
    pub fn new(name: impl Into<String>, target_dir: impl Into<PathBuf>) -> Self {
        RootPackage {
            name: name.into(),
            target_dir: target_dir.into(),
            repositories: Vec::new(),
        }
    }

    pub fn add_repository(&mut self, entry: RepositoryEntry) {
        self.repositories.push(entry);
    }

    pub fn config_path(&self, filename: &str) -> PathBuf {
        self.target_dir.join(filename)
    }
}

/// Mutable host state scoped to one install/update command invocation.
pub struct Session {
    pub root: RootPackage,
    pub repository_manager: RepositoryManager,
}

impl Session {
    pub fn new(root: RootPackage) -> Self {
        Session {
            root,
            repository_manager: RepositoryManager::new(),
        }
    }
}
