//! The `Sim` struct: snapshot ownership, frame-driven stepping, and
//! re-initialization.

use std::sync::Arc;
use std::time::Duration;

use swarm_agent::{AgentRngs, Swarm, SwarmBuilder};
use swarm_behavior::{StepParams, SteeringModel};
use swarm_core::{AgentKind, Arena, SwarmConfig, Tick};
use swarm_schedule::{FrameDecision, FrameScheduler};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<S>` owns the current swarm as an `Arc<Swarm>`.  Each step derives a
/// new swarm from the current one and swaps the `Arc`, so snapshots handed
/// out by [`snapshot`](Self::snapshot) are never mutated.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: SteeringModel> {
    config:    SwarmConfig,
    arena:     Arena,
    selection: Vec<AgentKind>,
    swarm:     Arc<Swarm>,
    rngs:      AgentRngs,
    params:    StepParams,
    scheduler: FrameScheduler,
    steering:  S,
}

impl<S: SteeringModel> Sim<S> {
    pub(crate) fn new(
        config:    SwarmConfig,
        arena:     Arena,
        selection: Vec<AgentKind>,
        scheduler: FrameScheduler,
        steering:  S,
    ) -> Self {
        let (swarm, rngs) = spawn(&config, arena, &selection);
        Self {
            params: StepParams::from_config(&config, &arena),
            config,
            arena,
            selection,
            swarm: Arc::new(swarm),
            rngs,
            scheduler,
            steering,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// A shared handle to the current swarm.  Stays valid (and unchanged)
    /// after later steps.
    pub fn snapshot(&self) -> Arc<Swarm> {
        Arc::clone(&self.swarm)
    }

    #[inline]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.swarm.tick()
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn selection(&self) -> &[AgentKind] {
        &self.selection
    }

    pub fn params(&self) -> &StepParams {
        &self.params
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn steering(&self) -> &S {
        &self.steering
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.scheduler.is_active()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Feed one host callback at timestamp `now`.  Steps at most once.
    pub fn on_frame<O: SimObserver>(&mut self, now: Duration, observer: &mut O) -> FrameDecision {
        let decision = self.scheduler.on_frame(now);
        if decision == FrameDecision::Step {
            self.step(observer);
        }
        decision
    }

    /// Advance exactly one tick, bypassing the frame scheduler and the
    /// active flag.  Returns the new tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Tick {
        let next_tick = self.swarm.tick().next();
        observer.on_tick_start(next_tick);

        let next = swarm_behavior::step(&self.swarm, &self.params, &self.steering, &mut self.rngs);
        self.swarm = Arc::new(next);

        tracing::trace!(
            tick = next_tick.0,
            mean_energy = self.swarm.mean_energy(),
            "step"
        );

        observer.on_tick_end(next_tick, &self.swarm);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && next_tick.0.is_multiple_of(interval) {
            observer.on_snapshot(next_tick, &self.swarm);
        }
        next_tick
    }

    /// Run exactly `n` ticks back-to-back (ignores the scheduler).
    ///
    /// Useful for headless runs and tests.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Report the final tick to `observer`.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_sim_end(self.tick());
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Pause or resume stepping.  Pausing leaves the current snapshot
    /// untouched; resuming starts a fresh timing baseline.
    pub fn set_active(&mut self, active: bool) {
        if active != self.scheduler.is_active() {
            tracing::info!(active, tick = self.tick().0, "simulation activity changed");
        }
        self.scheduler.set_active(active);
    }

    /// Replace the selection and rebuild the swarm at tick 0.
    pub fn set_selection<I, K, O>(&mut self, kinds: I, observer: &mut O)
    where
        I: IntoIterator<Item = K>,
        K: Into<AgentKind>,
        O: SimObserver,
    {
        self.selection = kinds.into_iter().map(Into::into).collect();
        self.reset(observer);
    }

    /// Change the arena and rebuild the swarm at tick 0.
    ///
    /// Fails, leaving the simulation untouched, if the new dimensions are
    /// invalid or make the configured buffer zone too wide.
    pub fn resize<O: SimObserver>(&mut self, width: f32, height: f32, observer: &mut O) -> SimResult<()> {
        let arena = Arena::new(width, height)?;
        self.config.validate_for(&arena)?;

        self.config.width = arena.width();
        self.config.height = arena.height();
        self.arena = arena;
        self.params = StepParams::from_config(&self.config, &arena);
        self.reset(observer);
        Ok(())
    }

    /// Rebuild the swarm at tick 0 from the current selection, arena, and
    /// `config.seed`.
    pub fn reset<O: SimObserver>(&mut self, observer: &mut O) {
        let (swarm, rngs) = spawn(&self.config, self.arena, &self.selection);
        self.swarm = Arc::new(swarm);
        self.rngs = rngs;

        tracing::debug!(
            agents = self.swarm.len(),
            arena = %self.arena,
            "swarm re-initialized"
        );
        observer.on_reset(&self.swarm);
    }
}

fn spawn(config: &SwarmConfig, arena: Arena, selection: &[AgentKind]) -> (Swarm, AgentRngs) {
    SwarmBuilder::from_config(config, arena)
        .selection(selection.iter().cloned())
        .build()
}
