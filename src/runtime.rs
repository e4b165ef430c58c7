use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Expand a shell glob against the current filesystem state.
    ///
    /// Entries the pattern matches but that cannot be inspected (unreadable
    /// directories) are skipped. Fails only on a malformed pattern.
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    #[tracing::instrument(skip(self))]
    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to get current directory")
    }

    #[tracing::instrument(skip(self))]
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self, contents))]
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).context("Failed to write to file")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[tracing::instrument(skip(self))]
    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).context("Failed to canonicalize path")
    }

    #[tracing::instrument(skip(self))]
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let entries = glob::glob(pattern).context("Invalid path pattern")?;
        Ok(entries.filter_map(|entry| entry.ok()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_glob_matches_in_order() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let pattern = format!("{}/*", dir.path().display());
        let matches = RealRuntime.glob(&pattern).unwrap();

        assert_eq!(
            matches,
            vec![dir.path().join("alpha"), dir.path().join("beta")]
        );
    }

    #[test]
    fn test_glob_no_matches() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/nothing-*", dir.path().display());
        assert!(RealRuntime.glob(&pattern).unwrap().is_empty());
    }

    #[test]
    fn test_glob_malformed_pattern() {
        assert!(RealRuntime.glob("packages/[").is_err());
    }
}
