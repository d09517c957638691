//! The `SpatialIndex` trait and the brute-force reference implementation.

use fl_core::{AgentId, Vec2, is_finite};

/// Neighbor lookup over a set of agent positions.
///
/// The flock calls [`rebuild`](Self::rebuild) once per tick with the
/// pre-tick positions, then [`query_within`](Self::query_within) once per
/// agent.  Implementations must be `Send + Sync` because queries may run on
/// Rayon's thread pool.
pub trait SpatialIndex: Send + Sync {
    /// Replace the indexed set with `positions`, where `positions[i]` is the
    /// position of `AgentId(i)`.
    fn rebuild(&mut self, positions: &[Vec2]);

    /// Append to `out` every indexed agent within `radius` of `center`,
    /// except `exclude`.  `out` is not cleared first.
    fn query_within(&self, center: Vec2, radius: f32, exclude: AgentId, out: &mut Vec<AgentId>);

    /// Number of agents currently indexed.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `true` if a query with this radius can match anything at all.
#[inline]
pub(crate) fn usable_radius(radius: f32) -> bool {
    radius.is_finite() && radius > 0.0
}

// ── BruteForceIndex ───────────────────────────────────────────────────────────

/// Linear scan over every agent.  O(n) per query, O(n²) per tick.
///
/// The right choice for small flocks (a few hundred boids), and the
/// reference the other indices are tested against.
#[derive(Clone, Debug, Default)]
pub struct BruteForceIndex {
    entries: Vec<(AgentId, Vec2)>,
}

impl BruteForceIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpatialIndex for BruteForceIndex {
    fn rebuild(&mut self, positions: &[Vec2]) {
        self.entries.clear();
        self.entries.extend(
            positions
                .iter()
                .enumerate()
                .filter(|(_, p)| is_finite(**p))
                .map(|(i, &p)| (AgentId(i as u32), p)),
        );
    }

    fn query_within(&self, center: Vec2, radius: f32, exclude: AgentId, out: &mut Vec<AgentId>) {
        if !usable_radius(radius) {
            return;
        }
        let radius_sq = radius * radius;
        out.extend(
            self.entries
                .iter()
                .filter(|(id, p)| *id != exclude && p.distance_squared(center) <= radius_sq)
                .map(|(id, _)| *id),
        );
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
