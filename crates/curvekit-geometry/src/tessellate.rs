//! Tessellation utilities for converting curves to polylines.

use curvekit_core::Bounded;
use curvekit_math::{Aabb3, Point3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::curve::Curve;

/// Settings for [`curve_to_polyline`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylineOptions {
    /// Maximum allowed deviation of a segment midpoint from the true curve
    pub tolerance: f64,
    /// Maximum recursion depth of the subdivision
    pub max_depth: u32,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_depth: 12,
        }
    }
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// A parameter interval is split in half while the curve point at its middle
/// deviates from the chord midpoint by more than `options.tolerance`.
pub fn curve_to_polyline(curve: &dyn Curve, options: &PolylineOptions) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];
    subdivide_curve(curve, t_min, t_max, options, &mut points, 0);
    points
}

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    options: &PolylineOptions,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    if depth >= options.max_depth {
        log::trace!("polyline subdivision hit depth limit {} at t={t0}..{t1}", options.max_depth);
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    // NaN deviation compares false and terminates here.
    if deviation > options.tolerance {
        subdivide_curve(curve, t0, t_mid, options, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, options, points, depth + 1);
    } else {
        points.push(p1);
    }
}

/// `density + 1` points at evenly spaced parameters across the domain.
///
/// A density of zero is treated as one segment.
pub fn sample_uniform(curve: &dyn Curve, density: usize) -> Vec<Point3> {
    let segments = density.max(1);
    let (t_min, t_max) = curve.domain();
    (0..=segments)
        .map(|i| {
            let t = t_min + (t_max - t_min) * i as f64 / segments as f64;
            curve.point_at(t)
        })
        .collect()
}

/// Tessellate many curves in parallel, preserving input order.
pub fn curves_to_polylines<C: Curve>(curves: &[C], options: &PolylineOptions) -> Vec<Vec<Point3>> {
    curves
        .par_iter()
        .map(|curve| curve_to_polyline(curve, options))
        .collect()
}

/// Union of the bounding boxes of `curves`, or `None` when empty.
pub fn union_bounds<C>(curves: &[C]) -> Option<Aabb3>
where
    C: Bounded<Bounds = Aabb3> + Sync,
{
    curves
        .par_iter()
        .map(Bounded::bounding_box)
        .reduce_with(|a, b| a.merge(&b))
}
