//! Framework error type.
//!
//! Sub-crates define their own error enums (`SpatialError`, `SteerError`,
//! `SimError`) and `fl-sim` folds them together with `From` impls.

use thiserror::Error;

use crate::AgentId;

/// The base error type for `fl-core` and `fl-agent`.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("{what} length {got} does not match agent count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

/// Shorthand result type for `fl-core` and `fl-agent`.
pub type FlockResult<T> = Result<T, FlockError>;
