//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use fl_agent::AgentStoreBuilder;
//! use fl_core::Vec2;
//!
//! let store = AgentStoreBuilder::new(250, /*seed=*/ 42)
//!     .spawn_disk(Vec2::ZERO, 200.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 250);
//! assert!(store.positions.iter().all(|p| p.length() <= 200.0 + 1e-3));
//! ```

use fl_core::{FlockError, FlockResult, SimRng, Vec2};

/// Fluent builder for [`AgentStore`].
///
/// By default every agent starts at the origin facing a random direction.
/// Call [`spawn_disk`](Self::spawn_disk) for a randomised placement, or
/// [`positions`](Self::positions) / [`headings`](Self::headings) to place
/// agents explicitly.  Explicit arrays win over the random ones.
///
/// [`AgentStore`]: crate::AgentStore
pub struct AgentStoreBuilder {
    count:     usize,
    seed:      u64,
    disk:      Option<(Vec2, f32)>,
    positions: Option<Vec<Vec2>>,
    headings:  Option<Vec<Vec2>>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` for spawn randomness.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            disk:      None,
            positions: None,
            headings:  None,
        }
    }

    /// Scatter agents uniformly inside the disk at `center` with `radius`.
    ///
    /// Agents may overlap; no minimum spacing is enforced.
    pub fn spawn_disk(mut self, center: Vec2, radius: f32) -> Self {
        self.disk = Some((center, radius.max(0.0)));
        self
    }

    /// Supply every agent's starting position (length must equal `count`).
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply every agent's starting heading (length must equal `count`).
    ///
    /// Headings are normalized; a zero vector is kept as-is and means
    /// "no heading yet".
    pub fn headings(mut self, headings: Vec<Vec2>) -> Self {
        self.headings = Some(headings);
        self
    }

    /// Validate explicit arrays and construct the store.
    ///
    /// Random draws always happen in the same order (all positions, then all
    /// headings), so the same seed and count reproduce the same flock whether
    /// or not some arrays were supplied explicitly.
    pub fn build(self) -> FlockResult<crate::AgentStore> {
        let count = self.count;
        let mut rng = SimRng::new(self.seed);

        let random_positions: Vec<Vec2> = match self.disk {
            Some((center, radius)) => (0..count)
                .map(|_| center + rng.in_unit_disk() * radius)
                .collect(),
            None => vec![Vec2::ZERO; count],
        };
        let random_headings: Vec<Vec2> = (0..count).map(|_| rng.unit_vector()).collect();

        let positions = match self.positions {
            Some(p) => {
                check_len(count, p.len(), "positions")?;
                p
            }
            None => random_positions,
        };

        let headings = match self.headings {
            Some(h) => {
                check_len(count, h.len(), "headings")?;
                h.into_iter().map(|v| v.normalize_or_zero()).collect()
            }
            None => random_headings,
        };

        Ok(crate::AgentStore::from_parts(positions, headings))
    }
}

fn check_len(expected: usize, got: usize, what: &'static str) -> FlockResult<()> {
    if expected != got {
        return Err(FlockError::LengthMismatch { expected, got, what });
    }
    Ok(())
}
