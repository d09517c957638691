//! The four steering rules.
//!
//! Each returns a raw contribution; [`crate::steer`] weights and blends them.
//! Avoidance, alignment and cohesion clamp their result to their own weight
//! before returning.

use fl_core::{Vec2, clamp_length, smooth_damp};

use crate::{AgentView, Containment, Neighbor, SteeringParams};

/// Move away from neighbors closer than the avoidance radius.
///
/// Averages the vectors pointing from each close neighbor to the agent.  With
/// no close neighbor the result is zero.  A neighbor sitting exactly on the
/// agent contributes a zero vector rather than an undefined direction.
pub fn avoidance(agent: &AgentView, neighbors: &[Neighbor], params: &SteeringParams) -> Vec2 {
    let radius_sq = params.avoidance_radius_sq();
    let mut sum = Vec2::ZERO;
    let mut close = 0u32;

    for n in neighbors {
        if n.position.distance_squared(agent.position) < radius_sq {
            sum += agent.position - n.position;
            close += 1;
        }
    }

    if close > 0 {
        sum /= close as f32;
    }
    clamp_length(sum, params.weights.avoidance)
}

/// Match the neighbors' mean heading; keep the current heading when alone.
///
/// The lone-agent case returns the heading unclamped.  A boid with no
/// neighbors therefore keeps cruising and never comes to rest on its own,
/// even at the containment centre; it only stops there when the alignment
/// weight is 0.
pub fn alignment(agent: &AgentView, neighbors: &[Neighbor], params: &SteeringParams) -> Vec2 {
    if neighbors.is_empty() {
        return agent.heading;
    }
    let sum: Vec2 = neighbors.iter().map(|n| n.heading).sum();
    clamp_length(sum / neighbors.len() as f32, params.weights.alignment)
}

/// Steer toward the neighbors' centroid through a damped spring.
///
/// The spring runs from the agent's heading toward the offset to the
/// centroid, using `smoothing` as its velocity memory.  `smoothing` is left
/// untouched when there are no neighbors.
pub fn cohesion(
    agent:     &AgentView,
    neighbors: &[Neighbor],
    params:    &SteeringParams,
    smoothing: &mut Vec2,
    dt:        f32,
) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let centroid = neighbors.iter().map(|n| n.position).sum::<Vec2>() / neighbors.len() as f32;
    let offset = centroid - agent.position;

    let smoothed = smooth_damp(
        agent.heading,
        offset,
        smoothing,
        params.cohesion_smoothing_time,
        dt,
        f32::INFINITY,
    );
    clamp_length(smoothed, params.weights.cohesion)
}

/// Pull back toward the centre once past 90 % of the containment radius.
///
/// Returns `offset × t²`, where `offset` points from the agent to the centre
/// and `t = |offset| / radius`.  Zero inside the dead zone.
pub fn containment(position: Vec2, region: &Containment) -> Vec2 {
    let offset = region.center - position;
    let t = offset.length() / region.radius;
    if t < Containment::DEAD_ZONE {
        return Vec2::ZERO;
    }
    offset * (t * t)
}
