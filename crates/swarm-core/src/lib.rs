//! `swarm-core` — foundational types for the swarm formation simulator.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It has no
//! `swarm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2`, `Arena`, heading normalisation                |
//! | [`time`]        | `Tick`, `FrameRate`                                   |
//! | [`rng`]         | `AgentRng` (per-agent deterministic streams)          |
//! | [`kind`]        | `AgentKind` and the built-in kind names               |
//! | [`preset`]      | `SwarmPreset`, `PresetCategory`, built-in presets     |
//! | [`config`]      | `SwarmConfig`, `EnergyParams`, `CollaborationRadius`  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod preset;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CollaborationRadius, EnergyParams, SwarmConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Arena, Vec2, normalize_heading};
pub use ids::AgentId;
pub use kind::AgentKind;
pub use preset::{PresetCategory, SwarmPreset, find_preset};
pub use rng::AgentRng;
pub use time::{FrameRate, Tick};
