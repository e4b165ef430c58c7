use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::package::Manifest;
use crate::runtime::Runtime;
use crate::version::VersionStrategy;

/// Distribution type for packages delivered from a local directory.
pub const DIST_TYPE_PATH: &str = "path";

/// A local working copy normalized into a path-sourced package descriptor.
///
/// Built fresh on every registration/rewrite pass; never cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedPackage {
    pub name: String,
    pub version: String,
    pub pretty_version: String,
    pub dist_type: String,
    pub dist_url: PathBuf,
    pub dist_reference: Option<String>,
    pub source_type: Option<String>,
    pub source_url: Option<String>,
}

impl ManagedPackage {
    fn from_manifest(manifest: Manifest, dir: &Path, pretty_version: String) -> Self {
        ManagedPackage {
            name: manifest.name,
            // The synthetic version override has already been applied.
            version: manifest.version.unwrap_or_default(),
            pretty_version,
            dist_type: DIST_TYPE_PATH.to_string(),
            dist_url: dir.to_path_buf(),
            dist_reference: None,
            // Delivered via local path, not via its source-control reference.
            source_type: None,
            source_url: None,
        }
    }
}

/// Build the managed package for a resolved directory.
///
/// Returns `Ok(None)` when the directory has no readable manifest or when
/// the package turns out to be the host project itself; both are normal
/// skips. A manifest that reads but cannot be parsed is a fatal error.
#[tracing::instrument(skip(runtime, strategy, root_name))]
pub fn build_managed_package<R: Runtime>(
    runtime: &R,
    dir: &Path,
    strategy: &dyn VersionStrategy,
    root_name: &str,
) -> Result<Option<ManagedPackage>> {
    let Some(mut manifest) = Manifest::load(runtime, dir)? else {
        debug!("No manifest in {:?}, skipping", dir);
        return Ok(None);
    };

    let guessed = strategy.guess_version(runtime, dir)?;
    manifest.version = Some(guessed.version);
    manifest.strip_branch_alias();

    if manifest.name == root_name {
        debug!("Skipping {:?}: it is the project itself", dir);
        return Ok(None);
    }

    Ok(Some(ManagedPackage::from_manifest(
        manifest,
        dir,
        guessed.pretty_version,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::version::{DEV_VERSION, MarkerVersionStrategy, MockVersionStrategy};
    use mockall::predicate::eq;

    fn manifest_json(name: &str, version: &str) -> String {
        format!(r#"{{"name": "{name}", "version": "{version}"}}"#)
    }

    fn expect_manifest(runtime: &mut MockRuntime, dir: &Path, json: String) {
        let manifest = dir.join(crate::package::MANIFEST_FILE);
        runtime
            .expect_exists()
            .with(eq(manifest.clone()))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(manifest))
            .returning(move |_| Ok(json.clone()));
    }

    fn expect_no_markers(runtime: &mut MockRuntime, dir: &Path) {
        for filename in crate::version::MARKER_FILES {
            runtime
                .expect_exists()
                .with(eq(dir.join(filename)))
                .returning(|_| false);
        }
    }

    #[test]
    fn test_missing_manifest_is_none() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);

        let package = build_managed_package(
            &runtime,
            Path::new("/work/not-a-package"),
            &MarkerVersionStrategy,
            "acme/app",
        )
        .unwrap();
        assert!(package.is_none());
    }

    #[test]
    fn test_unreadable_manifest_is_a_skip_not_an_error() {
        let mut runtime = MockRuntime::new();
        let dir = PathBuf::from("/work/locked");

        runtime
            .expect_exists()
            .with(eq(dir.join(crate::package::MANIFEST_FILE)))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("permission denied")));

        let package =
            build_managed_package(&runtime, &dir, &MarkerVersionStrategy, "acme/app").unwrap();
        assert!(package.is_none());
    }

    #[test]
    fn test_marker_version_overrides_manifest_version() {
        let mut runtime = MockRuntime::new();
        let dir = PathBuf::from("/work/lib-foo");

        expect_manifest(&mut runtime, &dir, manifest_json("acme/lib", "0.1.0"));
        runtime
            .expect_exists()
            .with(eq(dir.join(".studio.version")))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(dir.join(".studio.version")))
            .returning(|_| Ok("2.0.0\n".to_string()));

        let package = build_managed_package(&runtime, &dir, &MarkerVersionStrategy, "acme/app")
            .unwrap()
            .unwrap();

        assert_eq!(package.name, "acme/lib");
        assert_eq!(package.version, "2.0.0");
        assert_eq!(package.pretty_version, "2.0.0");
        assert_eq!(package.dist_type, DIST_TYPE_PATH);
        assert_eq!(package.dist_url, dir);
        assert_eq!(package.dist_reference, None);
        assert_eq!(package.source_type, None);
        assert_eq!(package.source_url, None);
    }

    #[test]
    fn test_no_marker_defaults_to_dev_version() {
        let mut runtime = MockRuntime::new();
        let dir = PathBuf::from("/work/lib-foo");

        expect_manifest(&mut runtime, &dir, manifest_json("acme/lib", "0.1.0"));
        expect_no_markers(&mut runtime, &dir);

        let package = build_managed_package(&runtime, &dir, &MarkerVersionStrategy, "acme/app")
            .unwrap()
            .unwrap();
        assert_eq!(package.version, DEV_VERSION);
    }

    #[test]
    fn test_project_itself_is_skipped() {
        let mut runtime = MockRuntime::new();
        let dir = PathBuf::from("/work/app");

        expect_manifest(&mut runtime, &dir, manifest_json("acme/app", "1.0.0"));
        expect_no_markers(&mut runtime, &dir);

        let package =
            build_managed_package(&runtime, &dir, &MarkerVersionStrategy, "acme/app").unwrap();
        assert!(package.is_none());
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("{broken".to_string()));

        let result = build_managed_package(
            &runtime,
            Path::new("/work/lib-foo"),
            &MarkerVersionStrategy,
            "acme/app",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_injected_strategy_is_used() {
        let mut runtime = MockRuntime::new();
        let dir = PathBuf::from("/work/lib-foo");

        expect_manifest(&mut runtime, &dir, manifest_json("acme/lib", "0.1.0"));

        let mut strategy = MockVersionStrategy::new();
        strategy
            .expect_guess_version()
            .returning(|_, _| Ok(crate::version::GuessedVersion::new("9.9.9")));

        let package = build_managed_package(&runtime, &dir, &strategy, "acme/app")
            .unwrap()
            .unwrap();
        assert_eq!(package.version, "9.9.9");
    }
}
