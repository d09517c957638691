//! The `Flock` struct and its tick loop.

use fl_agent::AgentStore;
use fl_core::{AgentId, SimClock, Tick, Vec2, is_finite};
use fl_spatial::SpatialIndex;
use fl_steer::{AgentView, Neighbor, Steering, SteeringParams, steer};

use crate::{
    AgentFault, FlockConfig, FlockObserver, NoopObserver, SimError, SimResult, TickReport,
    UpdateOrder,
};

// ── Per-agent result of the steer phase ───────────────────────────────────────

/// What the steer phase decided for one agent.  Collected for every agent
/// before the move phase in snapshot mode.
#[derive(Copy, Clone, Debug)]
pub(crate) struct AgentStep {
    velocity:  Vec2,
    neighbors: usize,
    fault:     Option<AgentFault>,
}

impl AgentStep {
    fn faulted(fault: AgentFault) -> Self {
        Self { velocity: Vec2::ZERO, neighbors: 0, fault: Some(fault) }
    }
}

/// Buffers reused from tick to tick so a steady-state tick does not allocate.
#[derive(Default)]
pub(crate) struct Scratch {
    ids:       Vec<AgentId>,
    neighbors: Vec<Neighbor>,
    steps:     Vec<AgentStep>,
}

// ── Flock ─────────────────────────────────────────────────────────────────────

/// The flock controller.
///
/// `Flock<I>` exclusively owns every agent and drives one steering pass per
/// call to [`advance`](Self::advance):
///
/// 1. **Index**: rebuild `I` from the pre-tick positions.
/// 2. **Steer**: for each agent, gather neighbors within the vision radius
///    (sorted by `AgentId`, self excluded) and run [`fl_steer::steer`].
/// 3. **Move**: apply each velocity with [`AgentStore::move_agent`].
///
/// Create via [`FlockBuilder`][crate::FlockBuilder].
pub struct Flock<I: SpatialIndex> {
    /// Run configuration.  Treat as read-only once the flock is built.
    pub config: FlockConfig,

    /// Tick counter and accumulated simulated time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).  Renderers read `positions`/`headings`.
    pub agents: AgentStore,

    /// Neighbor source.  Rebuilt at the start of every tick.
    pub index: I,

    pub(crate) scratch: Scratch,
}

impl<I: SpatialIndex> Flock<I> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick of length `dt`.
    ///
    /// Agents whose step cannot be computed are left in place and counted in
    /// [`TickReport::faulted`]; they never abort the tick.  Only an invalid
    /// `dt` (negative or non-finite) is an error, and it leaves the flock
    /// untouched.
    pub fn advance(&mut self, dt: f32) -> SimResult<TickReport> {
        self.advance_with(dt, &mut NoopObserver)
    }

    /// [`advance`](Self::advance) with observer callbacks.
    pub fn advance_with<O: FlockObserver>(
        &mut self,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<TickReport> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }

        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);

        self.index.rebuild(&self.agents.positions);

        let mut report = TickReport { tick, dt, moved: 0, faulted: 0, neighbor_total: 0 };
        match self.config.update_order {
            UpdateOrder::Snapshot => self.sweep_snapshot(dt, &mut report, observer),
            UpdateOrder::InPlace  => self.sweep_in_place(dt, &mut report, observer),
        }
        self.clock.advance(dt);

        if report.faulted > 0 {
            log::warn!("{tick}: {} of {} agents skipped", report.faulted, self.agents.count);
        }
        log::trace!(
            "{tick}: moved {} agents, mean neighbors {:.2}",
            report.moved,
            report.mean_neighbors(),
        );

        observer.on_tick_end(&report);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && tick.0.is_multiple_of(interval) {
            observer.on_snapshot(tick, &self.agents);
        }

        Ok(report)
    }

    /// Run exactly `n` ticks of length `dt`.
    pub fn run_ticks<O: FlockObserver>(
        &mut self,
        n:        u64,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            self.advance_with(dt, observer)?;
        }
        Ok(())
    }

    /// Compute what `agent` would steer toward right now, without moving
    /// anything or advancing its cohesion spring.
    ///
    /// Rebuilds the index from the current positions first, so the answer
    /// reflects the state between ticks.
    pub fn steering_for(&mut self, agent: AgentId, dt: f32) -> SimResult<Steering> {
        let state = self.agents.get(agent)?;
        self.index.rebuild(&self.agents.positions);

        let Scratch { ids, neighbors, .. } = &mut self.scratch;
        gather_neighbors(
            agent,
            state.position,
            &self.agents.positions,
            &self.agents.headings,
            &self.index,
            self.config.steering.vision_radius,
            ids,
            neighbors,
        );

        let view = AgentView { position: state.position, heading: state.heading };
        let mut spring = state.smoothing;
        Ok(steer(&view, neighbors, &self.config.steering, &mut spring, dt))
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.count
    }

    /// The next tick to be processed.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Sweeps ────────────────────────────────────────────────────────────

    /// Steer every agent against the pre-tick state, then move them all.
    fn sweep_snapshot<O: FlockObserver>(
        &mut self,
        dt:       f32,
        report:   &mut TickReport,
        observer: &mut O,
    ) {
        let params    = &self.config.steering;
        let index     = &self.index;
        let positions = self.agents.positions.as_slice();
        let headings  = self.agents.headings.as_slice();
        let smoothing = &mut self.agents.smoothing;
        let scratch   = &mut self.scratch;

        #[cfg(not(feature = "parallel"))]
        {
            let Scratch { ids, neighbors, steps } = scratch;
            steps.clear();
            steps.extend(smoothing.iter_mut().enumerate().map(|(i, spring)| {
                steer_agent(
                    AgentId(i as u32), positions, headings, spring, index, params, dt, ids, neighbors,
                )
            }));
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Each worker gets its own query buffers; each agent's spring is
            // a disjoint `&mut` handed out by `par_iter_mut`.
            smoothing
                .par_iter_mut()
                .enumerate()
                .map_init(
                    || (Vec::<AgentId>::new(), Vec::<Neighbor>::new()),
                    |bufs: &mut (Vec<AgentId>, Vec<Neighbor>), (i, spring)| {
                        let (ids, neighbors) = bufs;
                        steer_agent(
                            AgentId(i as u32), positions, headings, spring, index, params, dt,
                            ids, neighbors,
                        )
                    },
                )
                .collect_into_vec(&mut scratch.steps);
        }

        // Move phase: sequential, ascending AgentId.
        let tick = report.tick;
        for (i, step) in self.scratch.steps.iter().enumerate() {
            apply_step(&mut self.agents, AgentId(i as u32), step, dt, tick, report, observer);
        }
    }

    /// Steer and move one agent at a time.  Later agents read earlier agents'
    /// post-move positions and headings.
    fn sweep_in_place<O: FlockObserver>(
        &mut self,
        dt:       f32,
        report:   &mut TickReport,
        observer: &mut O,
    ) {
        let params = &self.config.steering;
        let index  = &self.index;
        let agents = &mut self.agents;
        let Scratch { ids, neighbors, .. } = &mut self.scratch;
        let tick = report.tick;

        for i in 0..agents.count {
            let agent = AgentId(i as u32);
            let step = steer_agent(
                agent,
                &agents.positions,
                &agents.headings,
                &mut agents.smoothing[i],
                index,
                params,
                dt,
                ids,
                neighbors,
            );
            apply_step(agents, agent, &step, dt, tick, report, observer);
        }
    }
}

// ── Steer / move helpers ──────────────────────────────────────────────────────

/// Fill `neighbors` with the state of every agent within `radius` of
/// `position`, excluding `agent`, in ascending `AgentId` order.
///
/// Sorting makes the floating-point sums in the rules independent of the
/// index implementation's traversal order.
#[allow(clippy::too_many_arguments)]
fn gather_neighbors<I: SpatialIndex>(
    agent:     AgentId,
    position:  Vec2,
    positions: &[Vec2],
    headings:  &[Vec2],
    index:     &I,
    radius:    f32,
    ids:       &mut Vec<AgentId>,
    neighbors: &mut Vec<Neighbor>,
) {
    ids.clear();
    index.query_within(position, radius, agent, ids);
    ids.sort_unstable();

    neighbors.clear();
    neighbors.extend(ids.iter().map(|id| Neighbor {
        position: positions[id.index()],
        heading:  headings[id.index()],
    }));
}

/// Run the steering rules for one agent.
///
/// The cohesion spring is only committed when the whole step is finite, so
/// a faulted agent keeps its previous spring state.
#[allow(clippy::too_many_arguments)]
fn steer_agent<I: SpatialIndex>(
    agent:     AgentId,
    positions: &[Vec2],
    headings:  &[Vec2],
    smoothing: &mut Vec2,
    index:     &I,
    params:    &SteeringParams,
    dt:        f32,
    ids:       &mut Vec<AgentId>,
    neighbors: &mut Vec<Neighbor>,
) -> AgentStep {
    let i = agent.index();
    let view = AgentView { position: positions[i], heading: headings[i] };
    if !is_finite(view.position) || !is_finite(view.heading) {
        return AgentStep::faulted(AgentFault::NonFiniteState);
    }

    gather_neighbors(
        agent, view.position, positions, headings, index, params.vision_radius, ids, neighbors,
    );

    let mut spring = *smoothing;
    let steering = steer(&view, neighbors, params, &mut spring, dt);
    if !is_finite(steering.velocity) || !is_finite(spring) {
        return AgentStep::faulted(AgentFault::NonFiniteVelocity);
    }
    *smoothing = spring;

    AgentStep { velocity: steering.velocity, neighbors: neighbors.len(), fault: None }
}

fn apply_step<O: FlockObserver>(
    agents:   &mut AgentStore,
    agent:    AgentId,
    step:     &AgentStep,
    dt:       f32,
    tick:     Tick,
    report:   &mut TickReport,
    observer: &mut O,
) {
    match step.fault {
        Some(fault) => {
            log::debug!("{tick}: {agent} skipped: {fault}");
            report.faulted += 1;
            observer.on_agent_fault(tick, agent, fault);
        }
        None => {
            agents.move_agent(agent, step.velocity, dt);
            report.moved += 1;
            report.neighbor_total += step.neighbors;
        }
    }
}
