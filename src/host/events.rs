/// Lifecycle hooks the host dispatches around an install/update command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Before the install command starts.
    PreInstallCmd,
    /// Before the update command starts.
    PreUpdateCmd,
    /// After the solver's request is assembled, before solving.
    PreDependenciesSolving,
    /// After the solver has produced its operation plan.
    PostDependenciesSolving,
}

/// A declared interest in one lifecycle event.
///
/// Higher priority subscribers run first; dispatch itself is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub event: Event,
    pub priority: u32,
}

impl Subscription {
    pub fn new(event: Event, priority: u32) -> Self {
        Subscription { event, priority }
    }
}
