//! `swarm-sim` — orchestrator for the swarm formation simulator.
//!
//! # Per-step flow
//!
//! ```text
//! host callback(now)
//!   ① FrameScheduler::on_frame(now)  → Step | Skip | Inactive
//!   ② on Step:
//!        next = swarm_behavior::step(&current, params, steering, rngs)
//!        current = Arc::new(next)          // old snapshots stay valid
//!   ③ observer hooks: on_tick_start, on_tick_end, on_snapshot
//! ```
//!
//! Changing the selection, resizing the arena, or calling `reset` rebuilds
//! the swarm at tick 0 from `config.seed`, so the same inputs always give
//! the same starting formation.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-agent step on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_behavior::AlignmentSteering;
//! use swarm_core::SwarmConfig;
//! use swarm_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SwarmConfig::default(), AlignmentSteering)
//!     .preset("meme-warfare")?
//!     .build()?;
//! sim.run_ticks(100, &mut NoopObserver);
//! let frame = sim.snapshot();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
