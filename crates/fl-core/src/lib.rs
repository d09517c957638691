//! `fl-core` — foundational types for the `rust_flock` boids framework.
//!
//! This crate is a dependency of every other `fl-*` crate.  It has no `fl-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`ids`]   | `AgentId`                                                   |
//! | [`geo`]   | `Vec2` re-export, `clamp_length`, `smooth_damp`, `unit_from_angle` |
//! | [`time`]  | `Tick`, `SimClock`                                          |
//! | [`rng`]   | `SimRng` (seeded global RNG)                                |
//! | [`error`] | `FlockError`, `FlockResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use geo::{Vec2, clamp_length, is_finite, smooth_damp, unit_from_angle};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
