//! Integration tests for fl-sim.

use fl_agent::{AgentStore, AgentStoreBuilder};
use fl_core::{AgentId, FlockError, Tick, Vec2};
use fl_spatial::{BruteForceIndex, GridIndex, RTreeIndex};
use fl_steer::{Containment, RuleWeights};

use crate::{
    AgentFault, Flock, FlockBuilder, FlockConfig, FlockObserver, NoopObserver, SimError,
    TickReport, UpdateOrder,
};

const DT: f32 = 0.1;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(agent_count: usize) -> FlockConfig {
    FlockConfig {
        agent_count,
        seed: 7,
        // Dense enough that most boids start with neighbors.
        agent_density: 0.1,
        ..FlockConfig::default()
    }
}

fn spawned(config: FlockConfig) -> Flock<BruteForceIndex> {
    FlockBuilder::new(config, BruteForceIndex::new()).build().unwrap()
}

fn scripted(config: FlockConfig, positions: Vec<Vec2>, headings: Vec<Vec2>) -> Flock<BruteForceIndex> {
    let store = AgentStoreBuilder::new(positions.len(), 0)
        .positions(positions)
        .headings(headings)
        .build()
        .unwrap();
    FlockBuilder::new(config, BruteForceIndex::new()).agents(store).build().unwrap()
}

/// Records every observer callback.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    ends:      Vec<TickReport>,
    snapshots: Vec<(Tick, usize)>,
    faults:    Vec<(Tick, AgentId, AgentFault)>,
}

impl FlockObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_agent_fault(&mut self, tick: Tick, agent: AgentId, fault: AgentFault) {
        self.faults.push((tick, agent, fault));
    }
    fn on_tick_end(&mut self, report: &TickReport) {
        self.ends.push(*report);
    }
    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshots.push((tick, agents.count));
    }
}

// ── FlockBuilder validation ───────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let flock = spawned(FlockConfig::default());
        assert_eq!(flock.agent_count(), 250);
        assert_eq!(flock.tick(), Tick::ZERO);
    }

    #[test]
    fn spawns_inside_disk_around_containment_centre() {
        let mut config = test_config(64);
        config.agent_density = 0.5;
        config.steering.containment.center = Vec2::new(10.0, -10.0);
        let flock = spawned(config.clone());
        for p in &flock.agents.positions {
            assert!(p.distance(Vec2::new(10.0, -10.0)) <= config.spawn_radius() + 1e-3);
        }
    }

    #[test]
    fn store_count_mismatch_errors() {
        let store = AgentStoreBuilder::new(3, 0).build().unwrap();
        let result = FlockBuilder::new(test_config(4), BruteForceIndex::new())
            .agents(store)
            .build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 4, got: 3 })));
    }

    #[test]
    fn store_with_short_array_rejected() {
        let mut store = AgentStoreBuilder::new(2, 0).build().unwrap();
        store.headings.pop();
        let result = FlockBuilder::new(test_config(2), BruteForceIndex::new())
            .agents(store)
            .build();
        assert!(matches!(
            result,
            Err(SimError::Agents(FlockError::LengthMismatch { expected: 2, got: 1, what: "headings" }))
        ));
    }

    #[test]
    fn store_with_long_smoothing_rejected() {
        let mut store = AgentStoreBuilder::new(2, 0).build().unwrap();
        store.smoothing.push(Vec2::ZERO);
        let result = FlockBuilder::new(test_config(2), BruteForceIndex::new())
            .agents(store)
            .build();
        assert!(matches!(
            result,
            Err(SimError::Agents(FlockError::LengthMismatch { got: 3, what: "smoothing", .. }))
        ));
    }

    #[test]
    fn invalid_steering_rejected_at_build() {
        let mut config = test_config(4);
        config.steering.max_speed = -1.0;
        let result = FlockBuilder::new(config, BruteForceIndex::new()).build();
        assert!(matches!(result, Err(SimError::Steering(_))));
    }

    #[test]
    fn invalid_density_rejected_at_build() {
        let mut config = test_config(4);
        config.agent_density = 0.0;
        let result = FlockBuilder::new(config, BruteForceIndex::new()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_flock_ticks() {
        let mut flock = spawned(test_config(0));
        let report = flock.advance(DT).unwrap();
        assert_eq!(report.moved, 0);
        assert_eq!(report.mean_neighbors(), 0.0);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance_tests {
    use super::*;

    #[test]
    fn advance_moves_clock() {
        let mut flock = spawned(test_config(10));
        let report = flock.advance(0.25).unwrap();
        assert_eq!(report.tick, Tick(0));
        assert_eq!(report.moved, 10);
        flock.advance(0.25).unwrap();
        assert_eq!(flock.tick(), Tick(2));
        assert!((flock.clock.elapsed - 0.5).abs() < 1e-9);
    }

    #[test]
    fn invalid_dt_is_rejected_without_side_effects() {
        let mut flock = spawned(test_config(5));
        let before = flock.agents.positions.clone();
        for dt in [-0.1, f32::NAN, f32::INFINITY] {
            assert!(matches!(flock.advance(dt), Err(SimError::InvalidTimeStep(_))));
        }
        assert_eq!(flock.tick(), Tick::ZERO);
        assert_eq!(flock.agents.positions, before);
    }

    #[test]
    fn zero_dt_changes_no_positions() {
        let mut flock = spawned(test_config(20));
        let before = flock.agents.positions.clone();
        flock.advance(0.0).unwrap();
        assert_eq!(flock.agents.positions, before);
        assert_eq!(flock.tick(), Tick(1));
    }

    #[test]
    fn speed_never_exceeds_max() {
        let config = test_config(120);
        let max = config.steering.max_speed;
        let mut flock = spawned(config);
        for _ in 0..40 {
            let before = flock.agents.positions.clone();
            let report = flock.advance(DT).unwrap();
            assert_eq!(report.faulted, 0);
            for (a, b) in before.iter().zip(&flock.agents.positions) {
                let speed = a.distance(*b) / DT;
                assert!(speed <= max + 1e-3, "speed {speed} > {max}");
            }
        }
    }

    #[test]
    fn headings_stay_unit_length() {
        let mut flock = spawned(test_config(60));
        flock.run_ticks(20, DT, &mut NoopObserver).unwrap();
        for h in &flock.agents.headings {
            assert!((h.length() - 1.0).abs() < 1e-4, "heading {h}");
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = spawned(test_config(50));
        let mut b = spawned(test_config(50));
        a.run_ticks(25, DT, &mut NoopObserver).unwrap();
        b.run_ticks(25, DT, &mut NoopObserver).unwrap();
        assert_eq!(a.agents.positions, b.agents.positions);
        assert_eq!(a.agents.smoothing, b.agents.smoothing);
    }

    #[test]
    fn reports_neighbor_totals() {
        // Three boids in a tight row: every one sees the other two.
        let mut flock = scripted(
            test_config(3),
            vec![Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0)],
            vec![Vec2::X; 3],
        );
        let report = flock.advance(DT).unwrap();
        assert_eq!(report.neighbor_total, 6);
        assert!((report.mean_neighbors() - 2.0).abs() < 1e-6);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn lone_agent_at_centre_without_alignment_does_not_move() {
        let mut config = test_config(1);
        config.steering.vision_radius = 0.0;
        config.steering.weights.alignment = 0.0;
        config.steering.containment.center = Vec2::new(3.0, 4.0);
        let mut flock = scripted(config, vec![Vec2::new(3.0, 4.0)], vec![Vec2::Y]);

        let report = flock.advance(DT).unwrap();
        assert_eq!(report.faulted, 0);
        assert_eq!(flock.agents.positions[0], Vec2::new(3.0, 4.0));
        assert_eq!(flock.agents.headings[0], Vec2::Y, "zero velocity keeps the heading");
    }

    #[test]
    fn lone_agent_keeps_course_at_max_speed() {
        // alignment = heading × 1 × drive 10 = 10 → clamped to max speed 5.
        let mut flock = scripted(test_config(1), vec![Vec2::ZERO], vec![Vec2::X]);
        flock.advance(DT).unwrap();
        assert!((flock.agents.positions[0] - Vec2::new(0.5, 0.0)).length() < 1e-5);
        assert_eq!(flock.agents.headings[0], Vec2::X);
    }

    #[test]
    fn co_located_agents_produce_no_nan() {
        let mut flock = scripted(
            test_config(2),
            vec![Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)],
            vec![Vec2::X, Vec2::Y],
        );
        for _ in 0..10 {
            let report = flock.advance(DT).unwrap();
            assert_eq!(report.faulted, 0);
        }
        assert!(flock.agents.positions.iter().all(|p| p.is_finite()));
        assert!(flock.agents.headings.iter().all(|h| h.is_finite()));
    }

    #[test]
    fn escaped_agent_is_pulled_back() {
        let mut config = test_config(1);
        config.steering.containment = Containment { center: Vec2::ZERO, radius: 10.0 };
        // Heading straight out; containment at t = 10 overwhelms alignment.
        let mut flock = scripted(config, vec![Vec2::new(100.0, 0.0)], vec![Vec2::X]);
        flock.advance(DT).unwrap();
        assert!(flock.agents.positions[0].x < 100.0);
        assert!((flock.agents.headings[0] - Vec2::NEG_X).length() < 1e-5);
    }

    #[test]
    fn flock_stays_near_containment_region() {
        let mut config = test_config(80);
        config.steering.containment = Containment { center: Vec2::ZERO, radius: 10.0 };
        config.steering.weights = RuleWeights { containment: 1.0, ..RuleWeights::default() };
        let mut flock = spawned(config);
        flock.run_ticks(300, DT, &mut NoopObserver).unwrap();
        let centroid = flock.agents.centroid().unwrap();
        assert!(centroid.length() < 10.0, "centroid drifted to {centroid}");
    }

    #[test]
    fn steering_probe_does_not_mutate() {
        let mut flock = spawned(test_config(30));
        let positions = flock.agents.positions.clone();
        let smoothing = flock.agents.smoothing.clone();
        let s = flock.steering_for(AgentId(3), DT).unwrap();
        assert!(s.velocity.length() <= flock.config.steering.max_speed + 1e-4);
        assert_eq!(flock.agents.positions, positions);
        assert_eq!(flock.agents.smoothing, smoothing);
        assert_eq!(flock.tick(), Tick::ZERO);
    }

    #[test]
    fn steering_probe_unknown_agent_errors() {
        let mut flock = spawned(test_config(3));
        assert!(matches!(flock.steering_for(AgentId(3), DT), Err(SimError::Agents(_))));
    }

    #[test]
    fn steering_probe_matches_next_tick() {
        let mut flock = spawned(test_config(40));
        let probe = flock.steering_for(AgentId(5), DT).unwrap();
        let before = flock.agents.positions[5];
        flock.advance(DT).unwrap();
        let moved = flock.agents.positions[5] - before;
        assert!((moved - probe.velocity * DT).length() < 1e-5);
    }
}

// ── Faults ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fault_tests {
    use super::*;

    #[test]
    fn non_finite_agent_is_skipped_and_reported() {
        let mut flock = spawned(test_config(10));
        flock.agents.positions[4] = Vec2::new(f32::NAN, 0.0);

        let mut rec = Recorder::default();
        let report = flock.advance_with(DT, &mut rec).unwrap();

        assert_eq!(report.faulted, 1);
        assert_eq!(report.moved, 9);
        assert_eq!(rec.faults, vec![(Tick(0), AgentId(4), AgentFault::NonFiniteState)]);
        for (i, p) in flock.agents.positions.iter().enumerate() {
            assert_eq!(p.is_finite(), i != 4, "agent {i}");
        }
    }

    #[test]
    fn poisoned_neighbor_heading_faults_only_its_viewers() {
        // Agent 1 has a NaN heading.  Agent 0 sees it; agent 2 is far away.
        let mut flock = scripted(
            test_config(3),
            vec![Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0), Vec2::new(5.0, 5.0)],
            vec![Vec2::X, Vec2::X, Vec2::Y],
        );
        flock.agents.headings[1] = Vec2::new(f32::NAN, f32::NAN);

        let mut rec = Recorder::default();
        let report = flock.advance_with(DT, &mut rec).unwrap();

        assert_eq!(report.faulted, 2);
        assert_eq!(report.moved, 1);
        assert_eq!(
            rec.faults,
            vec![
                (Tick(0), AgentId(0), AgentFault::NonFiniteVelocity),
                (Tick(0), AgentId(1), AgentFault::NonFiniteState),
            ]
        );
        assert_eq!(flock.agents.smoothing[0], Vec2::ZERO, "faulted spring not committed");
        assert_ne!(flock.agents.positions[2], Vec2::new(5.0, 5.0));
    }
}

// ── Update order ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod order_tests {
    use super::*;

    fn dense_row(order: UpdateOrder) -> Flock<BruteForceIndex> {
        let mut config = test_config(6);
        config.update_order = order;
        let positions = (0..6).map(|i| Vec2::new(i as f32 * 0.4, 0.0)).collect();
        let headings = (0..6).map(|i| if i % 2 == 0 { Vec2::X } else { Vec2::Y }).collect();
        scripted(config, positions, headings)
    }

    #[test]
    fn snapshot_is_independent_of_agent_order() {
        let mut config = test_config(40);
        config.agent_density = 0.05;
        let mut forward = spawned(config.clone());

        let mut positions = forward.agents.positions.clone();
        let mut headings = forward.agents.headings.clone();
        positions.reverse();
        headings.reverse();

        let mut reversed = scripted(config, positions, headings);
        forward.advance(DT).unwrap();
        reversed.advance(DT).unwrap();

        let n = forward.agent_count();
        for i in 0..n {
            let a = forward.agents.positions[i];
            let b = reversed.agents.positions[n - 1 - i];
            assert!((a - b).length() < 1e-4, "agent {i}: {a} vs {b}");
        }
    }

    #[test]
    fn in_place_first_agent_matches_snapshot() {
        let mut snap = dense_row(UpdateOrder::Snapshot);
        let mut live = dense_row(UpdateOrder::InPlace);
        snap.advance(DT).unwrap();
        live.advance(DT).unwrap();
        // Agent 0 is steered before anyone has moved in both modes.
        assert_eq!(snap.agents.positions[0], live.agents.positions[0]);
    }

    #[test]
    fn in_place_later_agents_see_earlier_moves() {
        let mut snap = dense_row(UpdateOrder::Snapshot);
        let mut live = dense_row(UpdateOrder::InPlace);
        snap.advance(DT).unwrap();
        live.advance(DT).unwrap();
        let differs = (1..6).any(|i| snap.agents.positions[i] != live.agents.positions[i]);
        assert!(differs, "in-place sweep should observe same-tick moves");
    }
}

// ── Index implementations ─────────────────────────────────────────────────────

#[cfg(test)]
mod index_tests {
    use super::*;

    #[test]
    fn all_indices_give_identical_trajectories() {
        let config = test_config(150);
        let cell = config.steering.vision_radius;

        let mut brute = FlockBuilder::new(config.clone(), BruteForceIndex::new()).build().unwrap();
        let mut grid = FlockBuilder::new(config.clone(), GridIndex::new(cell).unwrap()).build().unwrap();
        let mut tree = FlockBuilder::new(config, RTreeIndex::new()).build().unwrap();

        for _ in 0..30 {
            brute.advance(DT).unwrap();
            grid.advance(DT).unwrap();
            tree.advance(DT).unwrap();
        }
        assert_eq!(brute.agents.positions, grid.agents.positions);
        assert_eq!(brute.agents.positions, tree.agents.positions);
        assert_eq!(brute.agents.headings, tree.agents.headings);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn hooks_fire_once_per_tick() {
        let mut flock = spawned(test_config(5));
        let mut rec = Recorder::default();
        flock.run_ticks(4, DT, &mut rec).unwrap();
        assert_eq!(rec.starts, vec![Tick(0), Tick(1), Tick(2), Tick(3)]);
        assert_eq!(rec.ends.len(), 4);
        assert!(rec.ends.iter().all(|r| r.moved == 5 && r.faulted == 0));
        assert!(rec.snapshots.is_empty(), "snapshots disabled by default");
    }

    #[test]
    fn snapshots_follow_interval() {
        let mut config = test_config(5);
        config.snapshot_interval_ticks = 3;
        let mut flock = spawned(config);
        let mut rec = Recorder::default();
        flock.run_ticks(7, DT, &mut rec).unwrap();
        assert_eq!(rec.snapshots, vec![(Tick(0), 5), (Tick(3), 5), (Tick(6), 5)]);
    }
}

// ── Config serialization ──────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use fl_steer::SteeringParams;

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "agent_count": 12, "update_order": "in_place",
                        "steering": { "max_speed": 3.0 } }"#;
        let config: FlockConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.agent_count, 12);
        assert_eq!(config.update_order, UpdateOrder::InPlace);
        assert_eq!(config.steering.max_speed, 3.0);
        assert_eq!(config.steering.vision_radius, SteeringParams::default().vision_radius);
    }

    #[test]
    fn round_trips() {
        let config = test_config(9);
        let json = serde_json::to_string(&config).unwrap();
        let back: FlockConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
