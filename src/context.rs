//! Host context passed into button hooks.
//!
//! Buttons never talk to the host directly; they go through a context
//! value bound by [`HostContext`]. The trait seam keeps buttons generic
//! over whatever container embeds them and lets tests substitute stub
//! contexts.

use crate::scheduler::TickScheduler;

/// Capabilities a container must supply to its buttons.
pub trait HostContext {
    /// Name identifying the owning plugin or process.
    fn owner(&self) -> &str;

    /// The host's next-tick scheduler, for deferred actions.
    fn scheduler(&self) -> &TickScheduler;
}

/// The standard context a [`SlotGrid`](crate::grid::SlotGrid) host hands
/// to its buttons.
#[derive(Debug, Clone)]
pub struct MenuContext {
    owner: String,
    scheduler: TickScheduler,
}

impl MenuContext {
    /// Create a context for the named owner.
    pub fn new(owner: impl Into<String>, scheduler: TickScheduler) -> Self {
        Self {
            owner: owner.into(),
            scheduler,
        }
    }
}

impl HostContext for MenuContext {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }
}
