//! Tuning parameters for the steering pass.
//!
//! Parameters are fixed for a run.  [`SteeringParams::validate`] is called by
//! the flock builder; the rule functions assume validated input.

use fl_core::Vec2;

use crate::{SteerError, SteerResult};

// ── RuleWeights ───────────────────────────────────────────────────────────────

/// Per-rule weights.  Each doubles as the magnitude bound of its rule's raw
/// contribution (containment excepted, which is never clamped).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleWeights {
    pub avoidance:   f32,
    pub alignment:   f32,
    pub cohesion:    f32,
    pub containment: f32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            avoidance:   2.0,
            alignment:   1.0,
            cohesion:    3.0,
            containment: 0.1,
        }
    }
}

// ── Containment ───────────────────────────────────────────────────────────────

/// Circular region the flock is softly held inside.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Containment {
    pub center: Vec2,
    pub radius: f32,
}

impl Containment {
    /// Fraction of the radius inside which containment exerts no force.
    pub const DEAD_ZONE: f32 = 0.9;
}

impl Default for Containment {
    fn default() -> Self {
        Self { center: Vec2::ZERO, radius: 30.0 }
    }
}

// ── SteeringParams ────────────────────────────────────────────────────────────

/// Everything the steering pass needs besides the agents themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringParams {
    /// Neighbors are the agents within this distance.
    pub vision_radius: f32,

    /// Avoidance radius as a fraction of `vision_radius`, in `[0, 1]`.
    pub avoidance_radius_multiplier: f32,

    /// Hard cap on the final speed.
    pub max_speed: f32,

    /// Scalar applied to the blended steering vector before the speed cap.
    pub drive_factor: f32,

    pub weights: RuleWeights,

    pub containment: Containment,

    /// Time constant of the cohesion spring.
    pub cohesion_smoothing_time: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            vision_radius:               1.5,
            avoidance_radius_multiplier: 0.5,
            max_speed:                   5.0,
            drive_factor:                10.0,
            weights:                     RuleWeights::default(),
            containment:                 Containment::default(),
            cohesion_smoothing_time:     0.5,
        }
    }
}

impl SteeringParams {
    /// Squared avoidance radius: `(vision_radius × multiplier)²`.
    #[inline]
    pub fn avoidance_radius_sq(&self) -> f32 {
        let r = self.vision_radius * self.avoidance_radius_multiplier;
        r * r
    }

    /// Reject any value that would make the steering pass produce NaNs or
    /// meaningless forces.
    pub fn validate(&self) -> SteerResult<()> {
        non_negative("vision_radius", self.vision_radius)?;
        in_range("avoidance_radius_multiplier", self.avoidance_radius_multiplier, 0.0, 1.0)?;
        non_negative("max_speed", self.max_speed)?;
        non_negative("drive_factor", self.drive_factor)?;

        non_negative("weights.avoidance", self.weights.avoidance)?;
        non_negative("weights.alignment", self.weights.alignment)?;
        non_negative("weights.cohesion", self.weights.cohesion)?;
        non_negative("weights.containment", self.weights.containment)?;

        finite("containment.center.x", self.containment.center.x)?;
        finite("containment.center.y", self.containment.center.y)?;
        positive("containment.radius", self.containment.radius)?;

        positive("cohesion_smoothing_time", self.cohesion_smoothing_time)?;
        Ok(())
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn finite(name: &'static str, value: f32) -> SteerResult<()> {
    if !value.is_finite() {
        return Err(SteerError::NonFinite { name, value });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f32) -> SteerResult<()> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(SteerError::Negative { name, value });
    }
    Ok(())
}

fn positive(name: &'static str, value: f32) -> SteerResult<()> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(SteerError::NotPositive { name, value });
    }
    Ok(())
}

fn in_range(name: &'static str, value: f32, min: f32, max: f32) -> SteerResult<()> {
    finite(name, value)?;
    if !(min..=max).contains(&value) {
        return Err(SteerError::OutOfRange { name, value, min, max });
    }
    Ok(())
}
