//! Deterministic simulation-level RNG.
//!
//! The flock is only randomised at spawn time (positions and headings), so a
//! single seeded `SmallRng` is enough.  The same seed always yields the same
//! initial flock.

use std::f32::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// Simulation-level RNG used for spawning.
///
/// Single-threaded use only.  Draws happen once, in `AgentStoreBuilder::build`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniformly distributed point inside the unit disk.
    ///
    /// Uses the `sqrt` radius transform so density is uniform over area, not
    /// concentrated at the centre.
    pub fn in_unit_disk(&mut self) -> Vec2 {
        let r: f32 = self.0.r#gen::<f32>().sqrt();
        let theta = self.0.gen_range(0.0..TAU);
        Vec2::new(r * theta.cos(), r * theta.sin())
    }

    /// Uniformly distributed direction on the unit circle.
    pub fn unit_vector(&mut self) -> Vec2 {
        crate::unit_from_angle(self.0.gen_range(0.0..TAU))
    }
}
