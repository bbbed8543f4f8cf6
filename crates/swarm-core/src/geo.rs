//! Planar geometry: `Vec2` positions, the toroidal `Arena`, and heading
//! normalisation.
//!
//! Coordinates are single-precision screen units.  The arena is a
//! `width × height` rectangle whose edges wrap around; every position the
//! simulator hands out lies in `[0, width) × [0, height)`.

use std::f32::consts::TAU;

use crate::{CoreError, CoreResult};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A point (or displacement) in arena coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading` (radians, 0 = +x, clockwise in
    /// screen space because +y points down).
    #[inline]
    pub fn from_heading(heading: f32) -> Self {
        Self::new(heading.cos(), heading.sin())
    }

    /// Euclidean distance.  Not toroidal: two agents on opposite edges are
    /// far apart even though one wrap step separates them.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared distance, for comparing against a radius.
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Heading ───────────────────────────────────────────────────────────────────

/// Map any angle into `[0, 2π)`.  Non-finite input maps to `0.0`.
pub fn normalize_heading(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU { 0.0 } else { a }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// A bounded rectangle with toroidal (wraparound) edges.
///
/// Construct with [`Arena::new`] to reject bad dimensions, or
/// [`Arena::clamped`] to coerce them to at least [`Arena::MIN_DIMENSION`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    width:  f32,
    height: f32,
}

impl Arena {
    /// Smallest side length accepted by [`Arena::clamped`].
    pub const MIN_DIMENSION: f32 = 1.0;

    /// Validate and build an arena.  Zero, negative, and non-finite
    /// dimensions are rejected.
    pub fn new(width: f32, height: f32) -> CoreResult<Self> {
        let ok = |d: f32| d.is_finite() && d > 0.0;
        if !ok(width) || !ok(height) {
            return Err(CoreError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    /// Build an arena, raising any unusable dimension to `MIN_DIMENSION`.
    pub fn clamped(width: f32, height: f32) -> Self {
        let fix = |d: f32| {
            if d.is_finite() { d.max(Self::MIN_DIMENSION) } else { Self::MIN_DIMENSION }
        };
        Self { width: fix(width), height: fix(height) }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// `min(width, height)`: the basis for proportional collaboration radii.
    #[inline]
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// `true` if `p` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    /// Wrap `p` back into the buffered interior `[buffer, dim − buffer)` on
    /// each axis, carrying any overshoot past the opposite edge.
    ///
    /// `buffer` must be smaller than half of each dimension; a degenerate
    /// span collapses the axis to its midpoint.
    pub fn wrap(&self, p: Vec2, buffer: f32) -> Vec2 {
        Vec2::new(
            wrap_axis(p.x, self.width, buffer),
            wrap_axis(p.y, self.height, buffer),
        )
    }
}

impl Default for Arena {
    /// 600 × 400, the simulator's stock viewport.
    fn default() -> Self {
        Self { width: 600.0, height: 400.0 }
    }
}

impl std::fmt::Display for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn wrap_axis(value: f32, extent: f32, buffer: f32) -> f32 {
    let lo = buffer.max(0.0);
    let span = extent - 2.0 * lo;
    if span <= 0.0 {
        return extent * 0.5;
    }
    if value >= lo && value < lo + span {
        return value;
    }
    let mut v = (value - lo).rem_euclid(span);
    // NaN, or rounding up to exactly `span`.
    if v.is_nan() || v >= span {
        v = 0.0;
    }
    lo + v
}
