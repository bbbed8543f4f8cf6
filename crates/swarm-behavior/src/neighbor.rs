//! Proximity evaluation.
//!
//! Two agents are neighbors when their Euclidean distance is strictly less
//! than the collaboration radius.  Every unordered pair is tested exactly
//! once and recorded on both sides, so the relation is symmetric by
//! construction.  Cost is O(n²); n is the selection size, which is tiny.

use swarm_agent::SwarmAgent;
use swarm_core::{AgentId, Vec2};

/// `true` if `a` and `b` are strictly closer than `radius`.
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_sq(b) < radius * radius
}

/// For every agent (by index), the ids of the other agents within `radius`,
/// in ascending order.  Never includes the agent itself.
pub fn neighbor_sets(agents: &[SwarmAgent], radius: f32) -> Vec<Vec<AgentId>> {
    let mut sets: Vec<Vec<AgentId>> = vec![Vec::new(); agents.len()];
    for (i, a) in agents.iter().enumerate() {
        for (j, b) in agents.iter().enumerate().skip(i + 1) {
            if within_radius(a.position, b.position, radius) {
                sets[i].push(b.id);
                sets[j].push(a.id);
            }
        }
    }
    sets
}
