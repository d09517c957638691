//! Run configuration.

use fl_steer::SteeringParams;

use crate::{SimError, SimResult};

/// How one tick's moves interact with the same tick's neighbor reads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UpdateOrder {
    /// Every agent steers against the pre-tick state; moves are applied
    /// afterwards.  Result is independent of iteration order.
    #[default]
    Snapshot,
    /// Agents are steered and moved one at a time in `AgentId` order.
    /// Neighbor membership still comes from the pre-tick index, but neighbor
    /// positions and headings are read live, so later agents see earlier
    /// agents' moves.
    InPlace,
}

/// Top-level configuration, fixed for the lifetime of a [`Flock`].
///
/// Typically built in code or loaded from JSON (with the `serde` feature) by
/// the application and passed to [`FlockBuilder`].
///
/// [`Flock`]: crate::Flock
/// [`FlockBuilder`]: crate::FlockBuilder
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Number of boids spawned at build time.
    pub agent_count: usize,

    /// Seed for spawn positions and headings.
    pub seed: u64,

    /// Spawn disk radius per agent: the flock starts inside a disk of radius
    /// `agent_count × agent_density` around the containment centre.
    pub agent_density: f32,

    pub steering: SteeringParams,

    pub update_order: UpdateOrder,

    /// Call `FlockObserver::on_snapshot` every N ticks.  `0` disables
    /// snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            agent_count:             250,
            seed:                    42,
            agent_density:           0.8,
            steering:                SteeringParams::default(),
            update_order:            UpdateOrder::Snapshot,
            snapshot_interval_ticks: 0,
        }
    }
}

impl FlockConfig {
    /// Radius of the spawn disk.
    #[inline]
    pub fn spawn_radius(&self) -> f32 {
        self.agent_count as f32 * self.agent_density
    }

    pub fn validate(&self) -> SimResult<()> {
        self.steering.validate()?;
        if !(self.agent_density.is_finite() && self.agent_density > 0.0) {
            return Err(SimError::Config(format!(
                "agent_density must be finite and positive, got {}",
                self.agent_density
            )));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(SimError::Config(format!(
                "agent_count {} exceeds the AgentId range",
                self.agent_count
            )));
        }
        Ok(())
    }
}
