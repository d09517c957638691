//! Observer trait for progress reporting and data collection.

use fl_agent::AgentStore;
use fl_core::{AgentId, Tick};

use crate::{AgentFault, TickReport};

/// Callbacks invoked by [`Flock::advance_with`][crate::Flock::advance_with]
/// and [`Flock::run_ticks`][crate::Flock::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — fault counter
///
/// ```rust,ignore
/// struct FaultLog(Vec<(Tick, AgentId)>);
///
/// impl FlockObserver for FaultLog {
///     fn on_agent_fault(&mut self, tick: Tick, agent: AgentId, _fault: AgentFault) {
///         self.0.push((tick, agent));
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called at the very start of each tick, before the index is rebuilt.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once for every agent skipped this tick.
    fn on_agent_fault(&mut self, _tick: Tick, _agent: AgentId, _fault: AgentFault) {}

    /// Called after every agent has moved.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called every `config.snapshot_interval_ticks` ticks, after
    /// `on_tick_end`, with read-only access to the post-tick agent state.
    /// Renderers and recorders hook in here.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}
