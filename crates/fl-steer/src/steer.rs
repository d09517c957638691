//! Blend the rules into one velocity.

use fl_core::{Vec2, clamp_length};

use crate::rules::{alignment, avoidance, cohesion, containment};
use crate::{AgentView, Neighbor, SteeringParams};

/// One agent's steering result for one tick.
///
/// The four rule fields are the raw (pre-weight) contributions; `velocity` is
/// the final, speed-clamped command to hand to `AgentStore::move_agent`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Steering {
    pub avoidance:   Vec2,
    pub alignment:   Vec2,
    pub cohesion:    Vec2,
    pub containment: Vec2,
    pub velocity:    Vec2,
}

/// Run all four rules for one agent and combine them.
///
/// ```text
/// v = (avoid·w_a + align·w_l + cohere·w_c + contain·w_k) × drive_factor
/// if |v| > max_speed: v = v̂ × max_speed
/// ```
///
/// `smoothing` is the agent's cohesion spring memory and is updated in place.
pub fn steer(
    agent:     &AgentView,
    neighbors: &[Neighbor],
    params:    &SteeringParams,
    smoothing: &mut Vec2,
    dt:        f32,
) -> Steering {
    let w = &params.weights;

    let avoid = avoidance(agent, neighbors, params);
    let align = alignment(agent, neighbors, params);
    let cohere = cohesion(agent, neighbors, params, smoothing, dt);
    let contain = containment(agent.position, &params.containment);

    let blended = avoid * w.avoidance
        + align * w.alignment
        + cohere * w.cohesion
        + contain * w.containment;

    Steering {
        avoidance:   avoid,
        alignment:   align,
        cohesion:    cohere,
        containment: contain,
        velocity:    clamp_length(blended * params.drive_factor, params.max_speed),
    }
}
