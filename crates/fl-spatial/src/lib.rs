//! `fl-spatial` — neighbor discovery for the steering pass.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`index`] | `SpatialIndex` trait, `BruteForceIndex`                   |
//! | [`grid`]  | `GridIndex` — uniform hash grid                           |
//! | [`rtree`] | `RTreeIndex` — bulk-loaded R-tree (via `rstar`)           |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Query semantics
//!
//! Every index answers the same question: which agents lie within
//! `radius` of `center` (boundary inclusive), other than `exclude`?  A
//! radius `<= 0` or a non-finite radius matches nothing, and agents whose
//! position is not finite are never indexed.  Result order is unspecified;
//! callers that need determinism sort by `AgentId`.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | `GridIndex` buckets use FxHash instead of SipHash.      |

pub mod error;
pub mod grid;
pub mod index;
pub mod rtree;


pub use error::{SpatialError, SpatialResult};
pub use grid::GridIndex;
pub use index::{BruteForceIndex, SpatialIndex};
pub use rtree::RTreeIndex;
