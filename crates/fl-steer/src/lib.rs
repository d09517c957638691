//! `fl-steer` — the per-agent steering computation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`params`]  | `SteeringParams`, `RuleWeights`, `Containment`, validation    |
//! | [`context`] | `Neighbor`, `AgentView` — read-only inputs to the rules        |
//! | [`rules`]   | `avoidance`, `alignment`, `cohesion`, `containment`           |
//! | [`steer`]   | `steer` — blend, drive, speed clamp; `Steering` breakdown     |
//! | [`error`]   | `SteerError`, `SteerResult<T>`                                |
//!
//! # Weighting
//!
//! Avoidance, alignment and cohesion each clamp their own magnitude to their
//! weight, and the blend then multiplies by that same weight again.  The
//! largest possible contribution of a rule is therefore `weight²`, not
//! `weight`.  Tuned parameter sets depend on this, so it is kept as-is.
//!
//! Nothing here allocates or touches shared state: every function reads its
//! inputs and, for cohesion, updates one agent's smoothing velocity.

pub mod context;
pub mod error;
pub mod params;
pub mod rules;
pub mod steer;


pub use context::{AgentView, Neighbor};
pub use error::{SteerError, SteerResult};
pub use params::{Containment, RuleWeights, SteeringParams};
pub use steer::{Steering, steer};
