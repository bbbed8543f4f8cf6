//! Motion integrator — the pure `previous swarm → next swarm` step.
//!
//! # One step
//!
//! ```text
//! neighbors = neighbor_sets(prev, radius)           // from prev positions
//! for each agent in prev:
//!     heading'  = normalize(steer(agent, neighbors)) // mean heading + noise
//!     position' = wrap(position + speed · dir(heading'))
//!     energy'   = smooth(energy, |neighbors|)
//! ```
//!
//! Every agent reads only the previous snapshot, so the order in which
//! agents are integrated (or whether they run in parallel) cannot change
//! the result.

use swarm_agent::{AgentRngs, Swarm, SwarmAgent};
use swarm_core::{AgentId, AgentRng, Arena, Vec2, normalize_heading};

use crate::energy::smooth_energy;
use crate::neighbor::neighbor_sets;
use crate::{StepContext, StepParams, SteeringModel};

/// Move `speed` units along `heading`, then wrap into the buffered arena.
#[inline]
pub fn advance(position: Vec2, heading: f32, speed: f32, arena: &Arena, buffer: f32) -> Vec2 {
    arena.wrap(position + Vec2::from_heading(heading) * speed, buffer)
}

/// Produce the next tick's swarm from `prev`.
///
/// `prev` is left untouched; `rngs` must hold one RNG per agent (as built
/// alongside `prev` by `SwarmBuilder`).  The returned swarm's tick is
/// `prev.tick() + 1`.
pub fn step<S: SteeringModel>(
    prev:     &Swarm,
    params:   &StepParams,
    steering: &S,
    rngs:     &mut AgentRngs,
) -> Swarm {
    debug_assert_eq!(prev.len(), rngs.len(), "one RNG per agent");

    let neighbors = neighbor_sets(prev.agents(), params.radius);
    let ctx = StepContext::new(prev, params);

    #[cfg(not(feature = "parallel"))]
    let agents: Vec<SwarmAgent> = prev
        .agents()
        .iter()
        .zip(neighbors)
        .zip(rngs.inner.iter_mut())
        .map(|((agent, near), rng)| integrate(agent, near, &ctx, steering, rng))
        .collect();

    #[cfg(feature = "parallel")]
    let agents: Vec<SwarmAgent> = {
        use rayon::prelude::*;

        prev.agents()
            .par_iter()
            .zip(neighbors.into_par_iter())
            .zip(rngs.inner.par_iter_mut())
            .map(|((agent, near), rng)| integrate(agent, near, &ctx, steering, rng))
            .collect()
    };

    Swarm::from_agents(prev.tick().next(), prev.arena(), agents)
}

/// Advance a single agent by one tick.
fn integrate<S: SteeringModel>(
    agent:     &SwarmAgent,
    neighbors: Vec<AgentId>,
    ctx:       &StepContext<'_>,
    steering:  &S,
    rng:       &mut AgentRng,
) -> SwarmAgent {
    let heading = normalize_heading(steering.steer(agent, &neighbors, ctx, rng));
    let arena = ctx.prev.arena();
    let position = advance(agent.position, heading, agent.speed, &arena, ctx.params.buffer_zone);
    let energy = smooth_energy(agent.energy, neighbors.len(), &ctx.params.energy);

    SwarmAgent {
        id: agent.id,
        kind: agent.kind.clone(),
        position,
        heading,
        speed: agent.speed,
        energy,
        neighbors,
    }
}
