use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::runtime::Runtime;

/// Manifest filename expected in every managed directory.
pub const MANIFEST_FILE: &str = "package.json";

/// The slice of a package manifest this extension cares about.
///
/// Consumed read-only apart from two synthetic overrides applied before the
/// package object is built: the version is replaced with the probed one and
/// any branch alias is dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Load the manifest from a managed directory.
    ///
    /// A directory without a readable manifest is not a package: a missing
    /// manifest and one that cannot be opened are both normal skips,
    /// reported as `Ok(None)`. A manifest that reads but does not parse is
    /// an error.
    #[tracing::instrument(skip(runtime, dir))]
    pub fn load<R: Runtime>(runtime: &R, dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MANIFEST_FILE);
        if !runtime.exists(&path) {
            return Ok(None);
        }
        let content = match runtime.read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Manifest {:?} is not readable, skipping: {}", path, e);
                return Ok(None);
            }
        };
        let manifest = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(manifest))
    }

    /// Drop any branch alias. An aliased package would resolve under the
    /// alias instead of the marker version, so it must go before the
    /// package object is built.
    pub fn strip_branch_alias(&mut self) {
        self.extra.remove("branch-alias");
    }
}
