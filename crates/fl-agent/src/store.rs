//! Core agent storage.
//!
//! # Why Structure-of-Arrays?
//!
//! The steering pass reads every neighbor's position and heading but only
//! writes the smoothing state of the agent being steered.  Keeping the three
//! arrays as separate `pub` `Vec`s lets the tick loop borrow them disjointly:
//!
//! ```ignore
//! // fl-sim sweep (simplified):
//! let positions = &store.positions;
//! let headings  = &store.headings;
//! store.smoothing
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, smooth)| steer(positions[i], headings[i], smooth, ..))
//!     .collect::<Vec<_>>();
//! ```

use fl_core::{AgentId, FlockError, FlockResult, Vec2};

// ── AgentState ────────────────────────────────────────────────────────────────

/// A copy of one agent's record, for reading outside the hot path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id:        AgentId,
    pub position:  Vec2,
    pub heading:   Vec2,
    pub smoothing: Vec2,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every boid.
///
/// Every `Vec` has exactly `count` elements and `AgentId` is the index into
/// all of them.  Agents are created once by [`AgentStoreBuilder`] and never
/// removed, so ids stay stable for the whole run.
///
/// [`AgentStoreBuilder`]: crate::AgentStoreBuilder
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// World-space position.
    pub positions: Vec<Vec2>,

    /// Unit-length direction of the last non-zero commanded velocity.
    pub headings: Vec<Vec2>,

    /// Damping velocity remembered by the cohesion spring between ticks.
    pub smoothing: Vec<Vec2>,
}

impl AgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// `true` if `agent` refers to a stored record.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Copy out one agent's record.
    pub fn get(&self, agent: AgentId) -> FlockResult<AgentState> {
        if !self.contains(agent) {
            return Err(FlockError::AgentNotFound(agent));
        }
        let i = agent.index();
        Ok(AgentState {
            id:        agent,
            position:  self.positions[i],
            heading:   self.headings[i],
            smoothing: self.smoothing[i],
        })
    }

    /// Apply a commanded velocity for one step of length `dt`.
    ///
    /// The heading becomes the direction of `velocity`.  A zero-length or
    /// non-finite velocity leaves the heading where it was, so a stopped boid
    /// keeps facing the way it last moved.  The position always advances by
    /// `velocity * dt`.
    #[inline]
    pub fn move_agent(&mut self, agent: AgentId, velocity: Vec2, dt: f32) {
        let i = agent.index();
        if let Some(heading) = velocity.try_normalize() {
            self.headings[i] = heading;
        }
        self.positions[i] += velocity * dt;
    }

    // ── Flock-wide summaries ──────────────────────────────────────────────

    /// Mean position of all agents, or `None` for an empty store.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let sum: Vec2 = self.positions.iter().copied().sum();
        Some(sum / self.count as f32)
    }

    /// Length of the mean heading: `1.0` when every boid faces the same way,
    /// near `0.0` for a disordered flock.  `None` for an empty store.
    pub fn polarization(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let sum: Vec2 = self.headings.iter().copied().sum();
        Some((sum / self.count as f32).length())
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn from_parts(positions: Vec<Vec2>, headings: Vec<Vec2>) -> Self {
        let count = positions.len();
        debug_assert_eq!(count, headings.len());
        Self {
            count,
            positions,
            headings,
            smoothing: vec![Vec2::ZERO; count],
        }
    }
}
