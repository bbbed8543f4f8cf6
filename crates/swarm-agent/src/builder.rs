//! Fluent builder for constructing the initial `Swarm` + `AgentRngs` in one
//! step.
//!
//! # Usage
//!
//! ```rust
//! use swarm_agent::SwarmBuilder;
//! use swarm_core::Arena;
//!
//! let (swarm, rngs) = SwarmBuilder::new(Arena::default(), /*seed=*/ 42)
//!     .selection(["TOKEN_DEPLOYER", "TRADER"])
//!     .build();
//!
//! assert_eq!(swarm.len(), 2);
//! assert_eq!(rngs.len(),  2);
//! assert_eq!(swarm.agents()[1].label(), "TRADER-1");
//! ```

use std::f32::consts::TAU;

use swarm_core::{AgentId, AgentKind, AgentRng, Arena, EnergyParams, SwarmConfig, Tick, Vec2};

use crate::{AgentRngs, Swarm, SwarmAgent};

/// Fluent builder for [`Swarm`] + [`AgentRngs`].
///
/// Every agent draws its starting position, heading, and speed from its own
/// RNG stream, so the same selection, arena, and seed always yield the same
/// swarm.
pub struct SwarmBuilder {
    arena:          Arena,
    seed:           u64,
    selection:      Vec<AgentKind>,
    speed_min:      f32,
    speed_max:      f32,
    initial_energy: f32,
    buffer_zone:    f32,
}

impl SwarmBuilder {
    /// Create a builder for `arena` using `seed` as the global RNG seed.
    pub fn new(arena: Arena, seed: u64) -> Self {
        let defaults = SwarmConfig::default();
        Self {
            arena,
            seed,
            selection:      Vec::new(),
            speed_min:      defaults.speed_min,
            speed_max:      defaults.speed_max,
            initial_energy: defaults.energy.initial,
            buffer_zone:    defaults.buffer_zone,
        }
    }

    /// Take speed range, starting energy, buffer, and seed from `config`.
    pub fn from_config(config: &SwarmConfig, arena: Arena) -> Self {
        Self {
            arena,
            seed:           config.seed,
            selection:      Vec::new(),
            speed_min:      config.speed_min,
            speed_max:      config.speed_max,
            initial_energy: config.energy.initial,
            buffer_zone:    config.buffer_zone,
        }
    }

    /// The ordered list of selected kinds; one agent is created per entry.
    pub fn selection<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<AgentKind>,
    {
        self.selection = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Speeds are drawn from `[min, max)`; `min == max` fixes every speed.
    pub fn speed_range(mut self, min: f32, max: f32) -> Self {
        self.speed_min = min;
        self.speed_max = max;
        self
    }

    pub fn initial_energy(mut self, energy: f32) -> Self {
        self.initial_energy = energy;
        self
    }

    /// Spawn positions avoid this inset from every edge.
    pub fn buffer_zone(mut self, buffer: f32) -> Self {
        self.buffer_zone = buffer;
        self
    }

    /// Construct the tick-0 `Swarm` and its `AgentRngs`.
    pub fn build(self) -> (Swarm, AgentRngs) {
        let mut rngs = AgentRngs::new(self.selection.len(), self.seed);
        let energy = self.initial_energy.clamp(EnergyParams::MIN, EnergyParams::MAX);

        let agents = self
            .selection
            .into_iter()
            .zip(rngs.inner.iter_mut())
            .enumerate()
            .map(|(i, (kind, rng))| {
                let x = spawn_coordinate(rng, self.arena.width(), self.buffer_zone);
                let y = spawn_coordinate(rng, self.arena.height(), self.buffer_zone);
                let heading = rng.gen_range(0.0..TAU);
                let speed = if self.speed_max > self.speed_min {
                    rng.gen_range(self.speed_min..self.speed_max)
                } else {
                    self.speed_min
                };
                SwarmAgent {
                    id: AgentId(i as u32),
                    kind,
                    position: self.arena.wrap(Vec2::new(x, y), self.buffer_zone),
                    heading,
                    speed,
                    energy,
                    neighbors: Vec::new(),
                }
            })
            .collect();

        (Swarm::from_agents(Tick::ZERO, self.arena, agents), rngs)
    }
}

fn spawn_coordinate(rng: &mut AgentRng, extent: f32, buffer: f32) -> f32 {
    let lo = buffer.max(0.0);
    let hi = extent - lo;
    if hi > lo { rng.gen_range(lo..hi) } else { extent * 0.5 }
}
