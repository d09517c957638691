//! `fl-sim` — the flock controller for the rust_flock framework.
//!
//! # Tick loop
//!
//! ```text
//! advance(dt):
//!   ① Index   — rebuild the spatial index from pre-tick positions.
//!   ② Steer   — for every agent: query neighbors within vision radius,
//!               run avoidance / alignment / cohesion / containment,
//!               blend, drive, clamp to max speed
//!               (parallel with the `parallel` feature).
//!   ③ Move    — in ascending AgentId order: move_agent(velocity, dt),
//!               or count a fault and leave the agent where it is.
//!   ④ Clock   — tick += 1, elapsed += dt.
//! ```
//!
//! With [`UpdateOrder::InPlace`] phases ② and ③ are interleaved per agent
//! instead, reproducing the order-dependent behavior of a naive sweep.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the snapshot-mode steer phase on Rayon.           |
//! | `fx-hash`  | FxHash for `GridIndex` buckets.                        |
//! | `serde`    | `Serialize`/`Deserialize` on `FlockConfig`.            |
//!
//! # Quick-start
//!
//! ```rust
//! use fl_sim::{FlockBuilder, FlockConfig};
//! use fl_spatial::GridIndex;
//!
//! let config = FlockConfig { agent_count: 100, ..FlockConfig::default() };
//! let cell = config.steering.vision_radius;
//! let mut flock = FlockBuilder::new(config, GridIndex::new(cell).unwrap())
//!     .build()
//!     .unwrap();
//!
//! for _ in 0..60 {
//!     let report = flock.advance(1.0 / 60.0).unwrap();
//!     assert_eq!(report.faulted, 0);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod flock;
pub mod observer;
pub mod report;

#[cfg(test)]
mod tests;

pub use builder::FlockBuilder;
pub use config::{FlockConfig, UpdateOrder};
pub use error::{SimError, SimResult};
pub use flock::Flock;
pub use observer::{FlockObserver, NoopObserver};
pub use report::{AgentFault, TickReport};
