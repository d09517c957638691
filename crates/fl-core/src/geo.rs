//! 2-D vector math shared by the steering rules.
//!
//! Vectors are `glam::Vec2` (single precision).  The helpers here cover the
//! few operations `glam` does not express directly in the form the steering
//! pass needs: a threshold-guarded magnitude clamp and a critically damped
//! spring.

pub use glam::Vec2;

/// Heading for an angle in radians, measured counter-clockwise from +X.
#[inline]
pub fn unit_from_angle(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), radians.sin())
}

/// `true` if both components are finite (neither NaN nor infinite).
#[inline]
pub fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// Clamp the magnitude of `v` to `max`, preserving direction.
///
/// The vector is only normalized when `|v|² > max²`, so a zero vector (or any
/// vector already inside the bound) is returned untouched and never divided
/// by zero.  A negative `max` is treated as zero.
#[inline]
pub fn clamp_length(v: Vec2, max: f32) -> Vec2 {
    let max = max.max(0.0);
    if v.length_squared() > max * max {
        v.normalize_or_zero() * max
    } else {
        v
    }
}

/// Move `current` toward `target` with a critically damped spring.
///
/// `velocity` is the spring's memory and is updated in place; callers keep
/// it across ticks.  `smooth_time` is roughly the time to reach the target,
/// `max_speed` caps the rate of change (`f32::INFINITY` for no cap), and
/// `dt` is the step length.
///
/// The exponential decay `e^(-ωdt)` is approximated by the polynomial
/// `1 / (1 + x + 0.48x² + 0.235x³)`, which stays stable for large steps.
/// If the result would overshoot `target` it is snapped onto it and the
/// velocity reset.
pub fn smooth_damp(
    current:     Vec2,
    target:      Vec2,
    velocity:    &mut Vec2,
    smooth_time: f32,
    dt:          f32,
    max_speed:   f32,
) -> Vec2 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;

    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = clamp_length(current - target, max_change);
    let clamped_target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = clamped_target + (change + temp) * decay;

    // Overshoot: the output has passed the original target.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec2::ZERO;
    }

    output
}
