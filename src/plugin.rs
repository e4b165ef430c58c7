//! The extension a host package manager loads.
//!
//! Hooks into the command lifecycle twice: before install/update it
//! registers every managed path as a highest-priority path repository, so
//! the solver prefers the local copy; after solving it rewrites the plan so
//! operations on managed packages point at the local path regardless of
//! which source the solver picked (the marker file can make the local copy
//! look like a distinct version).

use anyhow::Result;
use log::{debug, info};
use std::collections::BTreeMap;

use crate::config::{CONFIG_FILE, Config};
use crate::host::{
    Event, Operation, Package, PathRepository, RepositoryEntry, RootPackage, Session,
    SolveRequest, Subscription,
};
use crate::package::{ManagedPackage, build_managed_packages};
use crate::runtime::Runtime;
use crate::version::MarkerVersionStrategy;

pub struct StudioPlugin<R: Runtime> {
    runtime: R,
}

impl<R: Runtime> StudioPlugin<R> {
    pub fn new(runtime: R) -> Self {
        StudioPlugin { runtime }
    }

    /// The lifecycle hooks this extension wants, for the host's dispatcher.
    ///
    /// Registration runs ahead of other pre-command subscribers so the
    /// repositories are in place before anything inspects them.
    pub fn subscriptions(&self) -> Vec<Subscription> {
        vec![
            Subscription::new(Event::PreInstallCmd, 512),
            Subscription::new(Event::PreUpdateCmd, 512),
            Subscription::new(Event::PreDependenciesSolving, 256),
            Subscription::new(Event::PostDependenciesSolving, 256),
        ]
    }

    /// Pre-install/pre-update hook: register every managed path with the
    /// resolver.
    ///
    /// Each managed package gets a path repository prepended to the
    /// repository search order (later registrations are tried first, and a
    /// registry entry with the same name only if the path entry cannot
    /// satisfy the constraint). The repository's version detection is the
    /// marker-file strategy, so the resolver sees the marker version instead
    /// of VCS metadata. The declared entry is also appended to the root
    /// package's repository list to keep the inspected configuration
    /// consistent.
    #[tracing::instrument(skip(self, session))]
    pub fn register_managed_packages(&self, session: &mut Session) -> Result<()> {
        let managed = self.build_registry(&session.root)?;

        for package in managed.values() {
            let entry = RepositoryEntry::path(&package.name, &package.dist_url);
            let repository =
                PathRepository::new(entry.clone(), Box::new(MarkerVersionStrategy));
            session.repository_manager.prepend_repository(repository);
            session.root.add_repository(entry);
            info!(
                "Managing {} ({}) from {}",
                package.name,
                package.pretty_version,
                package.dist_url.display()
            );
        }

        Ok(())
    }

    /// Pre-solving hook, reserved: pin each job's constraint to exactly the
    /// managed package's version so the solver cannot pick a registry
    /// release over the local copy. Currently a no-op; the post-solve
    /// rewrite covers the supported cases.
    #[tracing::instrument(skip(self, _session, _request))]
    pub fn rewrite_solve_request(
        &self,
        _session: &Session,
        _request: &mut SolveRequest,
    ) -> Result<()> {
        Ok(())
    }

    /// Post-solving hook: point every operation on a managed package at the
    /// local path.
    ///
    /// Rewrites in place and never changes an operation's kind. Update
    /// operations have their initial and target packages rewritten
    /// independently. The requested-version display string is untouched.
    #[tracing::instrument(skip(self, session, operations))]
    pub fn rewrite_operations(
        &self,
        session: &Session,
        operations: &mut [Operation],
    ) -> Result<()> {
        let managed = self.build_registry(&session.root)?;

        for operation in operations.iter_mut() {
            let mut rewritten = false;
            for package in operation.packages_mut() {
                if let Some(managed_package) = managed.get(&package.name) {
                    apply_managed_override(package, managed_package);
                    rewritten = true;
                }
            }
            if rewritten {
                debug!("Rewrote operation to local path: {}", operation);
            }
        }

        Ok(())
    }

    /// Fresh registry per invocation: reflects the filesystem as it is now.
    fn build_registry(&self, root: &RootPackage) -> Result<BTreeMap<String, ManagedPackage>> {
        let config = Config::load(&self.runtime, &root.config_path(CONFIG_FILE))?;
        build_managed_packages(
            &self.runtime,
            &config.path_patterns,
            &MarkerVersionStrategy,
            &root.name,
        )
    }
}

fn apply_managed_override(package: &mut Package, managed: &ManagedPackage) {
    package.clear_source();
    package.dist_type = Some(managed.dist_type.clone());
    package.dist_url = Some(managed.dist_url.display().to_string());
    package.dist_reference = managed.dist_reference.clone();
    package.replace_version(managed.version.clone(), managed.pretty_version.clone());
}
