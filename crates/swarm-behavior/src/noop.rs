//! A steering model that never turns.

use swarm_agent::SwarmAgent;
use swarm_core::{AgentId, AgentRng};

use crate::{StepContext, SteeringModel};

/// A [`SteeringModel`] that keeps every agent's heading and draws no noise.
///
/// Agents travel in straight lines, which makes motion exactly predictable
/// in tests.  Neighbor sets and energy still update as usual.
pub struct NoopSteering;

impl SteeringModel for NoopSteering {
    fn steer(
        &self,
        agent:      &SwarmAgent,
        _neighbors: &[AgentId],
        _ctx:       &StepContext<'_>,
        _rng:       &mut AgentRng,
    ) -> f32 {
        agent.heading
    }
}
