//! The `SteeringModel` trait and the default alignment rule.

use swarm_agent::SwarmAgent;
use swarm_core::{AgentId, AgentRng};

use crate::StepContext;

/// Pluggable heading rule.
///
/// Called once per agent per tick with the agent's state from the previous
/// tick, its neighbors at that tick, and its own [`AgentRng`].  Returns the
/// new heading in radians; the integrator normalises it into `[0, 2π)`.
///
/// # Thread safety
///
/// With the `parallel` feature the integrator calls `steer` for many agents
/// at once, so implementations must be `Send + Sync`.  Anything that varies
/// per agent belongs in the swarm, not in the model.
///
/// # Example
///
/// ```rust,ignore
/// struct Spin;
///
/// impl SteeringModel for Spin {
///     fn steer(&self, agent: &SwarmAgent, _n: &[AgentId], _ctx: &StepContext<'_>, _rng: &mut AgentRng) -> f32 {
///         agent.heading + 0.1
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    fn steer(
        &self,
        agent:     &SwarmAgent,
        neighbors: &[AgentId],
        ctx:       &StepContext<'_>,
        rng:       &mut AgentRng,
    ) -> f32;
}

/// The stock flocking rule: head toward the arithmetic mean of the
/// neighbors' headings (or keep the current heading when alone), then add
/// uniform noise in `[-heading_noise, heading_noise]` so the swarm never
/// locks into a single direction.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlignmentSteering;

impl SteeringModel for AlignmentSteering {
    fn steer(
        &self,
        agent:     &SwarmAgent,
        neighbors: &[AgentId],
        ctx:       &StepContext<'_>,
        rng:       &mut AgentRng,
    ) -> f32 {
        let headings: Vec<f32> = neighbors
            .iter()
            .filter_map(|&n| ctx.prev.get(n))
            .map(|other| other.heading)
            .collect();

        let base = if headings.is_empty() {
            agent.heading
        } else {
            headings.iter().sum::<f32>() / headings.len() as f32
        };

        base + rng.jitter(ctx.params.heading_noise)
    }
}
