//! `fl-agent` — Structure-of-Arrays boid storage for the `rust_flock` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays + `move_agent`), `AgentState`   |
//! | [`builder`] | `AgentStoreBuilder` (seeded disk spawn, explicit placement) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.      |

pub mod builder;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use store::{AgentState, AgentStore};
