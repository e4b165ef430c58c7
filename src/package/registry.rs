use anyhow::Result;
use log::warn;
use std::collections::BTreeMap;

use crate::package::{ManagedPackage, build_managed_package};
use crate::resolve::resolve_pattern;
use crate::runtime::Runtime;
use crate::version::VersionStrategy;

/// Build the full name-to-package mapping for a set of managed path patterns.
///
/// Directories that are not packages and the host project itself are
/// skipped. When two paths provide the same package name the later one wins;
/// a warning names both paths so an accidental broad glob does not shadow a
/// more specific pattern silently.
#[tracing::instrument(skip(runtime, strategy, root_name))]
pub fn build_managed_packages<R: Runtime>(
    runtime: &R,
    patterns: &[String],
    strategy: &dyn VersionStrategy,
    root_name: &str,
) -> Result<BTreeMap<String, ManagedPackage>> {
    let mut packages = BTreeMap::new();

    for pattern in patterns {
        for dir in resolve_pattern(runtime, pattern) {
            let Some(package) = build_managed_package(runtime, &dir, strategy, root_name)? else {
                continue;
            };
            let winner = package.dist_url.clone();
            if let Some(previous) = packages.insert(package.name.clone(), package) {
                warn!(
                    "Multiple managed paths provide {}: {} is shadowed by {}",
                    previous.name,
                    previous.dist_url.display(),
                    winner.display()
                );
            }
        }
    }

    Ok(packages)
}
