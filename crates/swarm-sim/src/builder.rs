//! Fluent builder for constructing a [`Sim`].

use swarm_behavior::SteeringModel;
use swarm_core::{AgentKind, Arena, SwarmConfig, find_preset};
use swarm_schedule::FrameScheduler;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SwarmConfig`]: arena size, seed, frame rate and tuning constants
/// - `S: SteeringModel`: the heading rule (e.g.
///   [`swarm_behavior::AlignmentSteering`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                  |
/// |-------------------|------------------------------------------|
/// | `.selection(v)`   | Empty selection (zero agents)            |
/// | `.preset(id)`     | none (replaces the selection)            |
/// | `.arena(a)`       | `config.width` × `config.height`         |
/// | `.active(b)`      | `true`                                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, AlignmentSteering)
///     .selection(["CEO", "TRADER", "LENDER"])
///     .active(false)
///     .build()?;
/// ```
pub struct SimBuilder<S: SteeringModel> {
    config:    SwarmConfig,
    steering:  S,
    selection: Vec<AgentKind>,
    arena:     Option<Arena>,
    active:    bool,
}

impl<S: SteeringModel> SimBuilder<S> {
    pub fn new(config: SwarmConfig, steering: S) -> Self {
        Self {
            config,
            steering,
            selection: Vec::new(),
            arena:     None,
            active:    true,
        }
    }

    /// The ordered list of agent kinds; one agent per entry.
    pub fn selection<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<AgentKind>,
    {
        self.selection = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the selection with a built-in preset's kinds.
    pub fn preset(mut self, id: &str) -> SimResult<Self> {
        self.selection = find_preset(id)?.selection();
        Ok(self)
    }

    /// Override the arena from `config.width` / `config.height`.
    pub fn arena(mut self, arena: Arena) -> Self {
        self.arena = Some(arena);
        self
    }

    /// Start active (the default) or paused.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Validate the configuration, spawn the tick-0 swarm, and return a
    /// ready-to-step [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        let mut config = self.config;
        if let Some(arena) = self.arena {
            config.width = arena.width();
            config.height = arena.height();
        }
        config.validate()?;
        let arena = config.arena()?;

        let mut scheduler = FrameScheduler::new(config.frame_rate);
        scheduler.set_active(self.active);

        tracing::info!(
            agents = self.selection.len(),
            %arena,
            seed = config.seed,
            rate = config.frame_rate.steps_per_second(),
            active = self.active,
            "building swarm simulation"
        );

        Ok(Sim::new(config, arena, self.selection, scheduler, self.steering))
    }
}
