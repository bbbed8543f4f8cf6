//! Energy accumulator: an exponential moving average toward a target set by
//! how many neighbors an agent has, so brightness drifts instead of snapping.

use swarm_core::EnergyParams;

/// `clamp(base + per_neighbor × neighbors, 0, 100)`.
#[inline]
pub fn target_energy(neighbors: usize, params: &EnergyParams) -> f32 {
    (params.base + params.per_neighbor * neighbors as f32)
        .clamp(EnergyParams::MIN, EnergyParams::MAX)
}

/// One smoothing step from `current` toward the target for `neighbors`.
///
/// With `smoothing ∈ (0, 1]` and `current ∈ [0, 100]` the result is a convex
/// combination of two in-range values; the final clamp only guards against
/// out-of-range inputs.
#[inline]
pub fn smooth_energy(current: f32, neighbors: usize, params: &EnergyParams) -> f32 {
    let target = target_energy(neighbors, params);
    (current + params.smoothing * (target - current)).clamp(EnergyParams::MIN, EnergyParams::MAX)
}
