//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `swarm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid arena {width} x {height}: dimensions must be finite and positive")]
    InvalidArena { width: f32, height: f32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

/// Shorthand result type for `swarm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
