//! `swarm-agent` — agent records and immutable swarm snapshots.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `SwarmAgent`, `Swarm` (per-tick snapshot), `AgentRngs`    |
//! | [`builder`]     | `SwarmBuilder` (tick-0 construction from a selection)     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::SwarmBuilder;
pub use store::{AgentRngs, Swarm, SwarmAgent};
