//! Read-only inputs to the steering rules.

use fl_core::Vec2;

/// The state of one neighbor as seen by the agent being steered.
///
/// Built per agent per tick from the flock's snapshot and discarded
/// afterwards; the rules never learn which agent a neighbor is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub position: Vec2,
    pub heading:  Vec2,
}

/// The agent being steered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub position: Vec2,
    pub heading:  Vec2,
}
