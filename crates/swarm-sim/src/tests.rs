//! Unit tests for swarm-sim.

use std::time::Duration;

use swarm_agent::Swarm;
use swarm_behavior::AlignmentSteering;
use swarm_core::{SwarmConfig, Tick};

use crate::{Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> SwarmConfig {
    SwarmConfig { seed: 42, ..SwarmConfig::default() }
}

fn sim_with(kinds: &[&str]) -> Sim<AlignmentSteering> {
    SimBuilder::new(test_config(), AlignmentSteering)
        .selection(kinds.iter().copied())
        .build()
        .unwrap()
}

/// Timestamp of the `k`-th callback of a 60 Hz host.
fn frame(k: u32) -> Duration {
    Duration::from_nanos(16_666_667) * k
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    ends:      Vec<Tick>,
    snapshots: Vec<Tick>,
    resets:    Vec<usize>,
    finished:  Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_tick_end(&mut self, tick: Tick, swarm: &Swarm) {
        assert_eq!(swarm.tick(), tick);
        self.ends.push(tick);
    }
    fn on_snapshot(&mut self, tick: Tick, _swarm: &Swarm) {
        self.snapshots.push(tick);
    }
    fn on_reset(&mut self, swarm: &Swarm) {
        assert_eq!(swarm.tick(), Tick::ZERO);
        self.resets.push(swarm.len());
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}

fn assert_in_bounds(swarm: &Swarm) {
    let arena = swarm.arena();
    for agent in swarm.agents() {
        assert!(arena.contains(agent.position), "{} at {}", agent.label(), agent.position);
        assert!((0.0..=100.0).contains(&agent.energy));
        assert!(!agent.neighbors.contains(&agent.id));
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use swarm_core::{Arena, CoreError};
    use swarm_schedule::FrameDecision;

    use super::*;
    use crate::{NoopObserver, SimError};

    #[test]
    fn builds_empty_swarm_by_default() {
        let sim = SimBuilder::new(test_config(), AlignmentSteering).build().unwrap();
        assert!(sim.swarm().is_empty());
        assert_eq!(sim.tick(), Tick::ZERO);
        assert!(sim.is_active());
        assert_eq!(sim.arena(), Arena::default());
    }

    #[test]
    fn preset_supplies_selection() {
        let sim = SimBuilder::new(test_config(), AlignmentSteering)
            .preset("nft-factory")
            .unwrap()
            .build()
            .unwrap();
        let labels: Vec<String> = sim.swarm().agents().iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["COLLECTION_DEPLOYER-0", "NFT_MINTER-1"]);
    }

    #[test]
    fn unknown_preset_errors() {
        let result = SimBuilder::new(test_config(), AlignmentSteering).preset("rug-pull");
        assert!(matches!(result, Err(SimError::Core(CoreError::UnknownPreset(_)))));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SwarmConfig { speed_min: 3.0, speed_max: 2.0, ..test_config() };
        let result = SimBuilder::new(config, AlignmentSteering).build();
        assert!(matches!(result, Err(SimError::Core(CoreError::Config(_)))));
    }

    #[test]
    fn invalid_dimensions_rejected() {
        let config = SwarmConfig { width: 0.0, ..test_config() };
        let result = SimBuilder::new(config, AlignmentSteering).build();
        assert!(matches!(result, Err(SimError::Core(CoreError::InvalidArena { .. }))));
    }

    #[test]
    fn arena_override_replaces_config_dimensions() {
        let sim = SimBuilder::new(test_config(), AlignmentSteering)
            .arena(Arena::new(800.0, 600.0).unwrap())
            .selection(["CEO"])
            .build()
            .unwrap();
        assert_eq!(sim.arena().width(), 800.0);
        assert_eq!(sim.config().height, 600.0);
        assert_eq!(sim.params().radius, 120.0);
    }

    #[test]
    fn starts_paused_when_requested() {
        let mut sim = SimBuilder::new(test_config(), AlignmentSteering)
            .selection(["CEO"])
            .active(false)
            .build()
            .unwrap();
        assert!(!sim.is_active());
        assert_eq!(sim.on_frame(frame(0), &mut NoopObserver), FrameDecision::Inactive);
        assert_eq!(sim.tick(), Tick::ZERO);
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stepping_tests {
    use super::*;
    use crate::NoopObserver;

    #[test]
    fn step_advances_tick() {
        let mut sim = sim_with(&["CEO", "TRADER"]);
        assert_eq!(sim.step(&mut NoopObserver), Tick(1));
        sim.run_ticks(9, &mut NoopObserver);
        assert_eq!(sim.tick(), Tick(10));
    }

    #[test]
    fn snapshots_are_not_mutated_by_later_steps() {
        let mut sim = sim_with(&["CEO", "TRADER", "LENDER"]);
        let before = sim.snapshot();
        let copy = (*before).clone();

        sim.run_ticks(5, &mut NoopObserver);

        assert_eq!(*before, copy);
        assert_eq!(before.tick(), Tick::ZERO);
        assert_ne!(*sim.snapshot(), copy);
    }

    #[test]
    fn invariants_hold_over_long_run() {
        let kinds = ["CEO", "TRADER", "LENDER", "NFT_MINTER", "TRADER", "TRADER", "CEO"];
        let mut sim = sim_with(&kinds);
        for _ in 0..1_000 {
            sim.step(&mut NoopObserver);
            assert_in_bounds(sim.swarm());
        }
    }

    #[test]
    fn zero_agents_keep_stepping() {
        let mut sim = sim_with(&[]);
        let mut stepped = 0;
        for k in 0..60 {
            if sim.on_frame(frame(k), &mut NoopObserver) == swarm_schedule::FrameDecision::Step {
                stepped += 1;
            }
            assert!(sim.swarm().is_empty());
        }
        assert!(stepped > 0);
        assert_eq!(sim.tick(), Tick(stepped));
    }

    #[test]
    fn observer_sees_every_tick_and_interval_snapshots() {
        let config = SwarmConfig { output_interval_ticks: 5, ..test_config() };
        let mut sim = SimBuilder::new(config, AlignmentSteering)
            .selection(["CEO"])
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        sim.run_ticks(10, &mut rec);
        sim.finish(&mut rec);

        assert_eq!(rec.starts.len(), 10);
        assert_eq!(rec.starts[0], Tick(1));
        assert_eq!(rec.ends.last(), Some(&Tick(10)));
        assert_eq!(rec.snapshots, [Tick(5), Tick(10)]);
        assert_eq!(rec.finished, Some(Tick(10)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SwarmConfig { output_interval_ticks: 0, ..test_config() };
        let mut sim = SimBuilder::new(config, AlignmentSteering)
            .selection(["CEO"])
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(10, &mut rec);
        assert!(rec.snapshots.is_empty());
        assert_eq!(rec.ends.len(), 10);
    }
}

// ── Frame-driven activity ─────────────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use std::sync::Arc;

    use swarm_schedule::FrameDecision;

    use super::*;
    use crate::NoopObserver;

    #[test]
    fn steps_at_target_rate_on_faster_host() {
        let mut sim = sim_with(&["CEO", "TRADER"]);
        for k in 0..=60 {
            sim.on_frame(frame(k), &mut NoopObserver);
        }
        assert!((29..=31).contains(&sim.tick().0), "got {}", sim.tick());
    }

    #[test]
    fn deactivation_freezes_the_swarm() {
        let mut sim = sim_with(&["TOKEN_DEPLOYER", "TRADER", "LENDER"]);
        let mut k = 0;
        while k < 60 {
            sim.on_frame(frame(k), &mut NoopObserver);
            k += 1;
        }

        sim.set_active(false);
        let frozen = sim.snapshot();
        let frozen_tick = sim.tick();

        // 200 ms of further callbacks.
        for _ in 0..12 {
            assert_eq!(sim.on_frame(frame(k), &mut NoopObserver), FrameDecision::Inactive);
            k += 1;
        }

        assert_eq!(sim.tick(), frozen_tick);
        assert!(Arc::ptr_eq(&frozen, &sim.snapshot()));
        assert_eq!(*frozen, *sim.snapshot());
    }

    #[test]
    fn reactivation_steps_on_next_callback() {
        let mut sim = sim_with(&["CEO"]);
        sim.on_frame(frame(0), &mut NoopObserver);
        sim.set_active(false);
        sim.on_frame(frame(1), &mut NoopObserver);
        sim.set_active(true);

        assert_eq!(sim.on_frame(frame(100), &mut NoopObserver), FrameDecision::Step);
        assert_eq!(sim.tick(), Tick(2));
    }
}

// ── Re-initialization ─────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use swarm_core::CoreError;

    use super::*;
    use crate::{NoopObserver, SimError};

    #[test]
    fn reset_restores_initial_state() {
        let mut sim = sim_with(&["CEO", "TRADER", "LENDER"]);
        let initial = sim.snapshot();

        sim.run_ticks(50, &mut NoopObserver);
        sim.reset(&mut NoopObserver);

        assert_eq!(*sim.snapshot(), *initial);
    }

    #[test]
    fn identical_inputs_produce_identical_runs() {
        let mut a = sim_with(&["CEO", "TRADER", "TRADER", "LENDER"]);
        let mut b = sim_with(&["CEO", "TRADER", "TRADER", "LENDER"]);
        a.run_ticks(100, &mut NoopObserver);
        b.run_ticks(100, &mut NoopObserver);
        assert_eq!(*a.snapshot(), *b.snapshot());
    }

    #[test]
    fn selection_change_rebuilds_at_tick_zero() {
        let mut sim = sim_with(&["CEO"]);
        let mut rec = Recorder::default();
        sim.run_ticks(20, &mut rec);

        sim.set_selection(["TRADER", "LENDER", "CEO"], &mut rec);

        assert_eq!(sim.tick(), Tick::ZERO);
        assert_eq!(sim.swarm().len(), 3);
        assert_eq!(sim.selection().len(), 3);
        assert_eq!(rec.resets, [3]);
    }

    #[test]
    fn same_selection_twice_is_idempotent() {
        let mut sim = sim_with(&[]);
        sim.set_selection(["CEO", "TRADER"], &mut NoopObserver);
        let first = sim.snapshot();
        sim.run_ticks(10, &mut NoopObserver);
        sim.set_selection(["CEO", "TRADER"], &mut NoopObserver);
        assert_eq!(*sim.snapshot(), *first);
    }

    #[test]
    fn resize_rebuilds_inside_new_arena() {
        let mut sim = sim_with(&["CEO", "TRADER", "LENDER", "NFT_MINTER"]);
        sim.run_ticks(10, &mut NoopObserver);

        sim.resize(200.0, 150.0, &mut NoopObserver).unwrap();

        assert_eq!(sim.tick(), Tick::ZERO);
        assert_eq!(sim.arena().width(), 200.0);
        assert_eq!(sim.params().radius, 30.0);
        for _ in 0..200 {
            sim.step(&mut NoopObserver);
            assert_in_bounds(sim.swarm());
        }
    }

    #[test]
    fn invalid_resize_leaves_sim_untouched() {
        let mut sim = sim_with(&["CEO"]);
        sim.run_ticks(3, &mut NoopObserver);
        let before = sim.snapshot();

        let result = sim.resize(0.0, 100.0, &mut NoopObserver);

        assert!(matches!(result, Err(SimError::Core(CoreError::InvalidArena { .. }))));
        assert_eq!(sim.tick(), Tick(3));
        assert_eq!(*sim.snapshot(), *before);
    }

    #[test]
    fn resize_rejects_arena_too_small_for_buffer() {
        let config = SwarmConfig { buffer_zone: 40.0, ..test_config() };
        let mut sim = SimBuilder::new(config, AlignmentSteering)
            .selection(["CEO"])
            .build()
            .unwrap();

        let result = sim.resize(60.0, 60.0, &mut NoopObserver);

        assert!(matches!(result, Err(SimError::Core(CoreError::Config(_)))));
        assert_eq!(sim.arena().width(), 600.0);
    }
}
