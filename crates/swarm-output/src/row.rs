//! Plain data rows written by output backends.

use swarm_agent::{Swarm, SwarmAgent};
use swarm_core::Tick;

/// One agent's state at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:           u64,
    pub agent_id:       u32,
    /// `"{kind}-{id}"`, as shown next to the agent when rendered.
    pub label:          String,
    pub x:              f32,
    pub y:              f32,
    /// Radians in `[0, 2π)`.
    pub heading:        f32,
    pub energy:         f32,
    pub neighbor_count: u32,
}

impl AgentSnapshotRow {
    pub fn from_agent(tick: Tick, agent: &SwarmAgent) -> Self {
        Self {
            tick:           tick.0,
            agent_id:       agent.id.0,
            label:          agent.label(),
            x:              agent.position.x,
            y:              agent.position.y,
            heading:        agent.heading,
            energy:         agent.energy,
            neighbor_count: agent.neighbors.len() as u32,
        }
    }
}

/// Aggregate statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:                u64,
    pub agent_count:         u32,
    /// Unordered neighbor pairs (each counted once).
    pub collaboration_links: u32,
    pub mean_energy:         f32,
}

impl TickSummaryRow {
    pub fn from_swarm(swarm: &Swarm) -> Self {
        Self {
            tick:                swarm.tick().0,
            agent_count:         swarm.len() as u32,
            collaboration_links: swarm.collaboration_edges().len() as u32,
            mean_energy:         swarm.mean_energy(),
        }
    }
}
