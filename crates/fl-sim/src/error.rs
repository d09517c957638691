use fl_core::FlockError;
use fl_spatial::SpatialError;
use fl_steer::SteerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("invalid steering parameters: {0}")]
    Steering(#[from] SteerError),

    #[error("spatial index error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent store error: {0}")]
    Agents(#[from] FlockError),

    #[error("agent store holds {got} agents but the configuration asks for {expected}")]
    AgentCountMismatch { expected: usize, got: usize },

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f32),
}

pub type SimResult<T> = Result<T, SimError>;
