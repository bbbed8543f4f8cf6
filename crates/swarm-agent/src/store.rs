//! Agent storage: `Swarm` (an immutable per-tick snapshot) and `AgentRngs`
//! (per-agent RNG state).
//!
//! # Two structs
//!
//! A `Swarm` is shared read-only: the simulator hands out `Arc<Swarm>`
//! snapshots to renderers and observers, and the next tick is *derived* from
//! the previous snapshot rather than written into it.  RNG state, on the
//! other hand, must be advanced every tick.  Keeping RNGs in a separate
//! `AgentRngs` lets the step function take `&Swarm` + `&mut AgentRngs`
//! at the same time:
//!
//! ```ignore
//! // swarm-behavior step (simplified):
//! let next: Vec<SwarmAgent> = prev.agents()
//!     .iter()
//!     .zip(rngs.inner.iter_mut())
//!     .map(|(agent, rng)| integrate(prev, agent, rng))
//!     .collect();
//! ```

use swarm_core::{AgentId, AgentKind, AgentRng, Arena, Tick, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
///
/// `AgentRngs` is `Send` (the inner `SmallRng` is `Send`).  With the
/// `parallel` feature of `swarm-behavior`, Rayon's `par_iter_mut()` hands
/// each worker exclusive access to a disjoint set of agents.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── SwarmAgent ────────────────────────────────────────────────────────────────

/// One simulated swarm member as of a single tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmAgent {
    /// Ordinal index within the current selection.
    pub id: AgentId,

    /// The selected kind this agent represents.
    pub kind: AgentKind,

    /// Always inside `[0, width) × [0, height)`.
    pub position: Vec2,

    /// Radians in `[0, 2π)`.
    pub heading: f32,

    /// Distance travelled per tick.  Fixed for the agent's lifetime.
    pub speed: f32,

    /// In `[0, 100]`.  Smoothed toward a neighbor-count target every tick.
    pub energy: f32,

    /// Agents that were within the collaboration radius at the start of the
    /// step that produced this tick, ascending.  Never contains `id`.
    /// Evaluated on the previous tick's positions, so a pair listed here
    /// may already have drifted apart by up to one step each.
    pub neighbors: Vec<AgentId>,
}

impl SwarmAgent {
    /// Stable display identifier: `"<KIND>-<index>"`, e.g. `"TRADER-1"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.kind, self.id.0)
    }

    /// `true` if at least one other agent is within range this tick.
    #[inline]
    pub fn is_collaborating(&self) -> bool {
        !self.neighbors.is_empty()
    }

    /// Render opacity in `[0.4, 0.9]`, brighter with more energy.
    #[inline]
    pub fn opacity(&self) -> f32 {
        0.4 + self.energy / 200.0
    }
}

// ── Swarm ─────────────────────────────────────────────────────────────────────

/// The full, immutable agent list for one tick.
///
/// There is no `&mut` access: each tick builds a fresh `Swarm`
/// from the previous one, so any holder of an older snapshot keeps seeing a
/// complete, consistent frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swarm {
    tick:   Tick,
    arena:  Arena,
    agents: Vec<SwarmAgent>,
}

impl Swarm {
    /// Assemble a snapshot.  `agents[i].id` must equal `AgentId(i)`.
    pub fn from_agents(tick: Tick, arena: Arena, agents: Vec<SwarmAgent>) -> Self {
        debug_assert!(
            agents.iter().enumerate().all(|(i, a)| a.id.index() == i),
            "agent ids must match their index"
        );
        Self { tick, arena, agents }
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    #[inline]
    pub fn agents(&self) -> &[SwarmAgent] {
        &self.agents
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> Option<&SwarmAgent> {
        self.agents.get(id.index())
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(|a| a.id)
    }

    /// Each neighbor pair once, as `(lower id, higher id)`: the line list a
    /// renderer draws between collaborating agents.
    pub fn collaboration_edges(&self) -> Vec<(AgentId, AgentId)> {
        self.agents
            .iter()
            .flat_map(|a| {
                a.neighbors
                    .iter()
                    .filter(move |&&n| n > a.id)
                    .map(move |&n| (a.id, n))
            })
            .collect()
    }

    /// Mean energy across the swarm; `0.0` when empty.
    pub fn mean_energy(&self) -> f32 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(|a| a.energy).sum::<f32>() / self.agents.len() as f32
    }
}
