//! Managed package discovery and construction.
//!
//! A managed package is a local working copy of a dependency, described by
//! the manifest in its directory plus an optional version marker file. This
//! module turns resolved managed paths into normalized path-sourced package
//! descriptors and collects them into a registry keyed by package name.

mod managed;
mod manifest;
mod registry;

pub use managed::{DIST_TYPE_PATH, ManagedPackage, build_managed_package};
pub use manifest::{MANIFEST_FILE, Manifest};
pub use registry::build_managed_packages;
