use std::fmt;

use crate::host::Package;

/// One instruction in the solver's finalized plan.
///
/// `requested` carries the user-facing requested-version string; it is kept
/// for display only and survives any rewrite of the embedded packages.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Install { package: Package, requested: String },
    Uninstall { package: Package },
    Update { initial: Package, target: Package, requested: String },
}

impl Operation {
    /// The package objects this operation resolves, mutably.
    pub fn packages_mut(&mut self) -> Vec<&mut Package> {
        match self {
            Operation::Install { package, .. } | Operation::Uninstall { package } => {
                vec![package]
            }
            Operation::Update { initial, target, .. } => vec![initial, target],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Install { package, requested } => {
                write!(f, "install {} ({})", package.name, requested)
            }
            Operation::Uninstall { package } => {
                write!(f, "uninstall {} ({})", package.name, package.pretty_version)
            }
            Operation::Update { initial, target, requested } => write!(
                f,
                "update {} from {} to {} ({})",
                target.name, initial.pretty_version, target.pretty_version, requested
            ),
        }
    }
}

/// One job in the solver's request (pre-solve), replaceable as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub package: String,
    pub constraint: String,
}

/// The request handed to the solver before dependency solving starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveRequest {
    pub jobs: Vec<Job>,
}
