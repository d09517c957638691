//! Unit tests for fl-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Vec2, clamp_length, is_finite, smooth_damp, unit_from_angle};

    const EPS: f32 = 1e-5;

    #[test]
    fn clamp_leaves_short_vectors_alone() {
        let v = Vec2::new(0.3, -0.4); // length 0.5
        assert_eq!(clamp_length(v, 1.0), v);
        assert_eq!(clamp_length(v, 0.5), v); // exactly on the bound
    }

    #[test]
    fn clamp_rescales_long_vectors() {
        let v = Vec2::new(3.0, 4.0);
        let c = clamp_length(v, 2.0);
        assert!((c.length() - 2.0).abs() < EPS);
        assert!((c.normalize() - v.normalize()).length() < EPS);
    }

    #[test]
    fn clamp_zero_vector_is_zero() {
        assert_eq!(clamp_length(Vec2::ZERO, 0.0), Vec2::ZERO);
        assert_eq!(clamp_length(Vec2::ZERO, 3.0), Vec2::ZERO);
    }

    #[test]
    fn clamp_negative_bound_collapses_to_zero() {
        assert_eq!(clamp_length(Vec2::new(1.0, 1.0), -1.0), Vec2::ZERO);
    }

    #[test]
    fn unit_from_angle_is_unit() {
        for i in 0..16 {
            let v = unit_from_angle(i as f32 * 0.4);
            assert!((v.length() - 1.0).abs() < EPS);
        }
        assert!((unit_from_angle(0.0) - Vec2::X).length() < EPS);
    }

    #[test]
    fn finite_check() {
        assert!(is_finite(Vec2::new(1.0, -2.0)));
        assert!(!is_finite(Vec2::new(f32::NAN, 0.0)));
        assert!(!is_finite(Vec2::new(0.0, f32::INFINITY)));
    }

    #[test]
    fn smooth_damp_moves_toward_target() {
        let mut vel = Vec2::ZERO;
        let current = Vec2::ZERO;
        let target = Vec2::new(10.0, 0.0);
        let out = smooth_damp(current, target, &mut vel, 0.5, 0.1, f32::INFINITY);
        assert!(out.x > 0.0 && out.x < 10.0, "got {out}");
        assert!(out.y.abs() < EPS);
        assert!(vel.x > 0.0, "spring velocity should point at the target");
    }

    #[test]
    fn smooth_damp_converges() {
        let mut vel = Vec2::ZERO;
        let mut current = Vec2::new(-4.0, 2.0);
        let target = Vec2::new(1.0, 1.0);
        for _ in 0..200 {
            current = smooth_damp(current, target, &mut vel, 0.5, 0.05, f32::INFINITY);
        }
        assert!((current - target).length() < 1e-3, "got {current}");
    }

    #[test]
    fn smooth_damp_zero_dt_holds_position() {
        let mut vel = Vec2::new(1.0, 0.0);
        let current = Vec2::new(2.0, 3.0);
        let out = smooth_damp(current, Vec2::ZERO, &mut vel, 0.5, 0.0, f32::INFINITY);
        assert!((out - current).length() < EPS);
        assert!(is_finite(vel));
    }

    #[test]
    fn smooth_damp_respects_max_speed() {
        let mut vel = Vec2::ZERO;
        let out = smooth_damp(Vec2::ZERO, Vec2::new(100.0, 0.0), &mut vel, 0.5, 0.1, 1.0);
        // The effective target is at most max_speed * smooth_time away.
        assert!(out.x <= 0.5 + EPS, "got {out}");
    }

    #[test]
    fn smooth_damp_at_target_stays_put() {
        let mut vel = Vec2::ZERO;
        let p = Vec2::new(1.0, 1.0);
        let out = smooth_damp(p, p, &mut vel, 0.5, 0.1, f32::INFINITY);
        assert_eq!(out, p);
        assert_eq!(vel, Vec2::ZERO);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn clock_accumulates_dt() {
        let mut clock = SimClock::new();
        assert_eq!(clock.mean_dt(), None);
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed - 0.75).abs() < 1e-9);
        assert_eq!(clock.last_dt, 0.25);
        assert!((clock.mean_dt().unwrap() - 0.375).abs() < 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
        let mut clock = SimClock::new();
        clock.advance(1.0);
        assert_eq!(clock.to_string(), "T1 (t = 1.000)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.in_unit_disk(), r2.in_unit_disk());
            assert_eq!(r1.unit_vector(), r2.unit_vector());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        assert_ne!(r1.unit_vector(), r2.unit_vector());
    }

    #[test]
    fn unit_disk_samples_inside() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            assert!(rng.in_unit_disk().length() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn unit_vectors_are_normalized() {
        let mut rng = SimRng::new(9);
        for _ in 0..100 {
            assert!((rng.unit_vector().length() - 1.0).abs() < 1e-5);
        }
    }
}
