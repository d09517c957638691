//! Fluent builder for constructing a [`Flock`].

use fl_agent::{AgentStore, AgentStoreBuilder};
use fl_core::{FlockError, FlockResult, SimClock};
use fl_spatial::SpatialIndex;

use crate::flock::Scratch;
use crate::{Flock, FlockConfig, SimError, SimResult};

/// Fluent builder for [`Flock<I>`].
///
/// # Required inputs
///
/// - [`FlockConfig`] — agent count, seed, steering parameters, …
/// - `I: SpatialIndex` — the neighbor source (e.g. [`fl_spatial::GridIndex`])
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                                    |
/// |----------------|------------------------------------------------------------|
/// | `.agents(s)`   | Seeded disk spawn of radius `config.spawn_radius()` around the containment centre |
///
/// # Example
///
/// ```rust,ignore
/// let mut flock = FlockBuilder::new(config, BruteForceIndex::new())
///     .agents(store)
///     .build()?;
/// flock.run_ticks(600, 1.0 / 60.0, &mut NoopObserver)?;
/// ```
pub struct FlockBuilder<I: SpatialIndex> {
    config: FlockConfig,
    index:  I,
    agents: Option<AgentStore>,
}

impl<I: SpatialIndex> FlockBuilder<I> {
    pub fn new(config: FlockConfig, index: I) -> Self {
        Self { config, index, agents: None }
    }

    /// Supply a pre-built agent store (must hold `config.agent_count` agents).
    ///
    /// Use this for scripted scenarios; `config.seed` and
    /// `config.agent_density` are then ignored.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Validate the configuration, spawn agents if none were supplied, and
    /// return a ready-to-run [`Flock`].
    pub fn build(self) -> SimResult<Flock<I>> {
        self.config.validate()?;
        let expected = self.config.agent_count;

        let agents = match self.agents {
            Some(store) => {
                if store.count != expected {
                    return Err(SimError::AgentCountMismatch { expected, got: store.count });
                }
                check_store_arrays(&store)?;
                store
            }
            None => AgentStoreBuilder::new(expected, self.config.seed)
                .spawn_disk(self.config.steering.containment.center, self.config.spawn_radius())
                .build()?,
        };

        log::info!(
            "flock ready: {} agents, {:?} updates, vision radius {}",
            agents.count,
            self.config.update_order,
            self.config.steering.vision_radius,
        );
        log::debug!("steering parameters: {:?}", self.config.steering);

        Ok(Flock {
            config:  self.config,
            clock:   SimClock::new(),
            agents,
            index:   self.index,
            scratch: Scratch::default(),
        })
    }
}

/// Every SoA array of a supplied store must hold exactly `count` entries.
fn check_store_arrays(store: &AgentStore) -> FlockResult<()> {
    let arrays = [
        (store.positions.len(), "positions"),
        (store.headings.len(), "headings"),
        (store.smoothing.len(), "smoothing"),
    ];
    for (got, what) in arrays {
        if got != store.count {
            return Err(FlockError::LengthMismatch { expected: store.count, got, what });
        }
    }
    Ok(())
}
