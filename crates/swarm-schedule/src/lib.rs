//! `swarm-schedule` — drives simulation steps from host frame callbacks.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`frame`]  | `FrameScheduler`, `FrameDecision`                 |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`              |
//!
//! # Timing model (summary)
//!
//! The host calls back at its own refresh rate with a monotonic timestamp.
//! The scheduler answers each callback with at most one step:
//!
//! ```text
//! inactive                    → Inactive
//! first callback after start  → Step   (timing baseline = now)
//! now − last < interval       → Skip
//! otherwise                   → Step   (timing baseline = now)
//! ```
//!
//! Missed steps are never queued: after a long stall the next callback
//! yields a single step, not a burst.

pub mod error;
pub mod frame;


pub use error::{ScheduleError, ScheduleResult};
pub use frame::{FrameDecision, FrameScheduler};
