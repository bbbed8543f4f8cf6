//! Simulator configuration.
//!
//! Every tuning value the simulator uses lives in [`SwarmConfig`].  The
//! numbers are cosmetic (they shape how the swarm looks, not what it
//! guarantees), so all of them may be overridden, but [`SwarmConfig::validate`]
//! rejects values that would break the position/energy invariants.
//!
//! With the `serde` feature the config derives `Deserialize` with
//! `#[serde(default)]`, so a JSON file only needs the fields it changes:
//!
//! ```json
//! { "width": 800, "height": 600, "seed": 7, "heading_noise": 0.1 }
//! ```

use crate::{Arena, CoreError, CoreResult, FrameRate};

// ── CollaborationRadius ───────────────────────────────────────────────────────

/// How far apart two agents may be and still count as neighbors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CollaborationRadius {
    /// An absolute distance in arena units.
    Fixed(f32),
    /// A fraction of `min(width, height)`, so behaviour scales with the arena.
    FractionOfMin(f32),
}

impl CollaborationRadius {
    /// Resolve to an absolute distance for `arena`.
    pub fn resolve(self, arena: &Arena) -> f32 {
        match self {
            CollaborationRadius::Fixed(r) => r,
            CollaborationRadius::FractionOfMin(f) => f * arena.min_dimension(),
        }
    }
}

impl Default for CollaborationRadius {
    /// 20 % of the arena's smaller side.
    fn default() -> Self {
        CollaborationRadius::FractionOfMin(0.2)
    }
}

// ── EnergyParams ──────────────────────────────────────────────────────────────

/// Constants for the energy moving average.
///
///   target  = clamp(base + per_neighbor × neighbors, 0, 100)
///   energy' = energy + smoothing × (target − energy)
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnergyParams {
    /// Energy every agent starts with.
    pub initial:      f32,
    pub base:         f32,
    pub per_neighbor: f32,
    /// EMA factor in `(0, 1]`.
    pub smoothing:    f32,
}

impl EnergyParams {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            initial:      100.0,
            base:         60.0,
            per_neighbor: 10.0,
            smoothing:    0.1,
        }
    }
}

// ── SwarmConfig ───────────────────────────────────────────────────────────────

/// Top-level simulator configuration.
///
/// Typically built with `..SwarmConfig::default()` or loaded from JSON by
/// the application crate and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwarmConfig {
    /// Arena width.  Default: 600.
    pub width: f32,

    /// Arena height.  Default: 400.
    pub height: f32,

    /// Master RNG seed.  The same seed and selection always produce the same
    /// initial swarm.
    pub seed: u64,

    /// Target step rate, independent of the host callback rate.  Default: 30.
    pub frame_rate: FrameRate,

    pub collaboration_radius: CollaborationRadius,

    /// Half-width of the uniform heading perturbation, radians.  Default: 0.05.
    pub heading_noise: f32,

    /// Per-agent speed is drawn from `[speed_min, speed_max)` at creation.
    pub speed_min: f32,
    pub speed_max: f32,

    /// Inset from each edge that defines the wrap boundary.  Default: 0.
    pub buffer_zone: f32,

    pub energy: EnergyParams,

    /// Emit a full snapshot to observers every N ticks.  0 disables
    /// snapshots; 1 = every tick.
    pub output_interval_ticks: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        let arena = Arena::default();
        Self {
            width:                 arena.width(),
            height:                arena.height(),
            seed:                  0,
            frame_rate:            FrameRate::default(),
            collaboration_radius:  CollaborationRadius::default(),
            heading_noise:         0.05,
            speed_min:             2.0,
            speed_max:             3.0,
            buffer_zone:           0.0,
            energy:                EnergyParams::default(),
            output_interval_ticks: 1,
        }
    }
}

impl SwarmConfig {
    /// The validated arena described by `width` × `height`.
    pub fn arena(&self) -> CoreResult<Arena> {
        Arena::new(self.width, self.height)
    }

    /// Check every field against the invariants the simulator relies on.
    pub fn validate(&self) -> CoreResult<()> {
        let arena = self.arena()?;
        self.validate_for(&arena)
    }

    /// Like [`validate`](Self::validate) but against an explicit arena
    /// (used after a resize, when `width`/`height` no longer apply).
    pub fn validate_for(&self, arena: &Arena) -> CoreResult<()> {
        let config_err = |msg: String| Err(CoreError::Config(msg));

        let radius = self.collaboration_radius.resolve(arena);
        if !radius.is_finite() || radius <= 0.0 {
            return config_err(format!("collaboration radius must be positive, got {radius}"));
        }
        if !self.heading_noise.is_finite() || self.heading_noise < 0.0 {
            return config_err(format!("heading noise must be >= 0, got {}", self.heading_noise));
        }
        if !self.speed_min.is_finite() || !self.speed_max.is_finite()
            || self.speed_min < 0.0 || self.speed_max < self.speed_min
        {
            return config_err(format!(
                "speed range [{}, {}) is empty or negative",
                self.speed_min, self.speed_max
            ));
        }
        if !self.buffer_zone.is_finite() || self.buffer_zone < 0.0
            || 2.0 * self.buffer_zone >= arena.min_dimension()
        {
            return config_err(format!(
                "buffer zone {} must be >= 0 and less than half of {arena}",
                self.buffer_zone
            ));
        }

        let e = &self.energy;
        if !(e.smoothing > 0.0 && e.smoothing <= 1.0) {
            return config_err(format!("energy smoothing must be in (0, 1], got {}", e.smoothing));
        }
        if !(EnergyParams::MIN..=EnergyParams::MAX).contains(&e.initial) {
            return config_err(format!("initial energy must be in [0, 100], got {}", e.initial));
        }
        if !e.base.is_finite() || !e.per_neighbor.is_finite() {
            return config_err("energy base and per-neighbor gain must be finite".into());
        }
        Ok(())
    }
}
