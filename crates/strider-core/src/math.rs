//! Scalar and vector helpers used throughout the walker.

use nalgebra::{Point2, Unit, Vector2};

/// Separation below which two points are treated as coincident.
pub const DIR_EPSILON: f32 = 1e-6;

/// Cubic smoothstep easing: `3t^2 - 2t^3`, with `t` clamped to [0, 1].
///
/// Zero slope at both endpoints, so foot motion eased through this has no
/// velocity discontinuity at liftoff or touchdown.
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (2.0f32.mul_add(-t, 3.0))
}

/// Unit direction from `from` toward `to`.
///
/// Returns `None` when the points are within [`DIR_EPSILON`] of each other,
/// so callers never divide by a near-zero norm.
#[must_use]
pub fn direction(from: &Point2<f32>, to: &Point2<f32>) -> Option<Unit<Vector2<f32>>> {
    Unit::try_new(to - from, DIR_EPSILON)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
