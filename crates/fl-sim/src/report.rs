//! Per-tick diagnostics.

use fl_core::Tick;
use thiserror::Error;

/// Why an agent was skipped this tick.
///
/// A faulted agent is left exactly where it was; the rest of the flock moves
/// normally.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum AgentFault {
    #[error("agent position or heading is not finite")]
    NonFiniteState,

    #[error("steering produced a non-finite velocity")]
    NonFiniteVelocity,
}

/// Summary of one completed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick: Tick,

    /// Step length the tick ran with.
    pub dt: f32,

    /// Agents that were moved.
    pub moved: usize,

    /// Agents skipped because of an [`AgentFault`].
    pub faulted: usize,

    /// Sum of every agent's neighbor count this tick.
    pub neighbor_total: usize,
}

impl TickReport {
    /// Average neighbor-context size over the agents that were moved.
    pub fn mean_neighbors(&self) -> f32 {
        if self.moved == 0 {
            return 0.0;
        }
        self.neighbor_total as f32 / self.moved as f32
    }
}
