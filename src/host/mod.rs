//! Seams into the host package manager.
//!
//! The extension never reaches into sealed host internals; everything it
//! mutates is exposed here as plain data or an explicit injection point: the
//! repository search order accepts prepends, a path repository takes its
//! version-detection strategy as a constructor argument, and the solver's
//! job list is replaceable data. The solver, installer and event dispatch
//! themselves stay on the host side.

mod events;
mod operation;
mod package;
mod repository;
mod session;

pub use events::{Event, Subscription};
pub use operation::{Job, Operation, SolveRequest};
pub use package::Package;
pub use repository::{
    PathRepository, REPOSITORY_TYPE_PATH, RepositoryEntry, RepositoryManager, RepositoryOptions,
};
pub use session::{RootPackage, Session};
