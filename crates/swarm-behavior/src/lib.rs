//! `swarm-behavior` — the per-tick swarm update.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`neighbor`] | `neighbor_sets`, `within_radius`: symmetric proximity test       |
//! | [`energy`]   | `target_energy`, `smooth_energy`: EMA toward a neighbor target   |
//! | [`model`]    | `SteeringModel` trait, `AlignmentSteering` (default rule)        |
//! | [`noop`]     | `NoopSteering`: never turns, draws no noise                      |
//! | [`context`]  | `StepParams`, `StepContext<'a>`: read-only view of the last tick |
//! | [`motion`]   | `step` (pure `&Swarm → Swarm` integrator), `advance`             |
//!
//! # Design notes
//!
//! `step` never mutates the previous swarm.  It computes neighbor sets from
//! the previous positions, then derives each agent's next state from that
//! same immutable snapshot.  Only the per-agent RNGs advance, and each agent
//! owns its own, so the `parallel` feature produces bit-identical output.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-agent integration on Rayon's thread pool. |

pub mod context;
pub mod energy;
pub mod model;
pub mod motion;
pub mod neighbor;
pub mod noop;


pub use context::{StepContext, StepParams};
pub use energy::{smooth_energy, target_energy};
pub use model::{AlignmentSteering, SteeringModel};
pub use motion::{advance, step};
pub use neighbor::{neighbor_sets, within_radius};
pub use noop::NoopSteering;
