//! Project-local configuration (`studio.json`).
//!
//! Holds the ordered list of managed path patterns. The plugin reads it once
//! per command invocation; the CLI edits it. Loading is always explicit:
//! callers pass the runtime and the file path, there is no ambient config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::runtime::Runtime;

/// Configuration filename, looked up in the project's target directory.
pub const CONFIG_FILE: &str = "studio.json";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Glob patterns naming local package directories, in priority order.
    #[serde(rename = "path-patterns", default)]
    pub path_patterns: Vec<String>,
}

impl Config {
    /// Load the configuration, treating a missing file as an empty one.
    #[tracing::instrument(skip(runtime, path))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        if !runtime.exists(path) {
            return Ok(Config::default());
        }
        let content = runtime.read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    #[tracing::instrument(skip(self, runtime, path))]
    pub fn save<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        runtime.write(path, format!("{json}\n").as_bytes())
    }

    /// Add a pattern. Returns false if it was already present.
    pub fn add_pattern(&mut self, pattern: &str) -> bool {
        if self.path_patterns.iter().any(|p| p == pattern) {
            return false;
        }
        self.path_patterns.push(pattern.to_string());
        true
    }

    /// Remove a pattern. Returns false if it was not present.
    pub fn remove_pattern(&mut self, pattern: &str) -> bool {
        let before = self.path_patterns.len();
        self.path_patterns.retain(|p| p != pattern);
        self.path_patterns.len() != before
    }
}
