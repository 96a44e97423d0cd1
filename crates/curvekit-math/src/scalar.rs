//! Scalar helpers shared by the curve evaluators.

use crate::{DVec2, DVec3};

/// Clamp `v` into `[0, 1]`.
///
/// `f64::max` returns the non-NaN operand, so NaN saturates to `0.0`,
/// `-inf` to `0.0` and `+inf` to `1.0`.
#[inline]
pub fn saturate(v: f64) -> f64 {
    v.max(0.0).min(1.0)
}

/// Componentwise [`saturate`].
#[inline]
pub fn saturate2(v: DVec2) -> DVec2 {
    DVec2::new(saturate(v.x), saturate(v.y))
}

/// Componentwise [`saturate`].
#[inline]
pub fn saturate3(v: DVec3) -> DVec3 {
    DVec3::new(saturate(v.x), saturate(v.y), saturate(v.z))
}
