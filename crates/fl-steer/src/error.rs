use thiserror::Error;

/// Rejected tuning parameters.  Raised once at configuration time so the
/// steering pass never has to guard against NaN-producing inputs.
#[derive(Debug, Error, PartialEq)]
pub enum SteerError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name:  &'static str,
        value: f32,
        min:   f32,
        max:   f32,
    },
}

pub type SteerResult<T> = Result<T, SteerError>;
