//! Read-only state passed to every steering callback.

use swarm_agent::Swarm;
use swarm_core::{Arena, EnergyParams, SwarmConfig};

/// Per-arena step parameters, resolved once from a [`SwarmConfig`].
///
/// The collaboration radius may be proportional to the arena, so these are
/// rebuilt whenever the arena changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepParams {
    /// Absolute collaboration radius in arena units.
    pub radius:        f32,
    /// Half-width of the uniform heading perturbation, radians.
    pub heading_noise: f32,
    /// Inset from each edge that defines the wrap boundary.
    pub buffer_zone:   f32,
    pub energy:        EnergyParams,
}

impl StepParams {
    pub fn from_config(config: &SwarmConfig, arena: &Arena) -> Self {
        Self {
            radius:        config.collaboration_radius.resolve(arena),
            heading_noise: config.heading_noise,
            buffer_zone:   config.buffer_zone,
            energy:        config.energy,
        }
    }
}

/// A read-only view of the previous tick, shared (immutably) across all
/// agents while the next tick is computed.
///
/// # Lifetimes
///
/// Borrows live for one step.  The previous `Swarm` is never mutated; the
/// step returns a new one.
pub struct StepContext<'a> {
    /// The swarm as of the previous tick.
    pub prev:   &'a Swarm,
    pub params: &'a StepParams,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(prev: &'a Swarm, params: &'a StepParams) -> Self {
        Self { prev, params }
    }
}
