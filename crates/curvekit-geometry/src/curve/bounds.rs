//! Analytic axis-aligned bounds of Bezier curves.
//!
//! A Bezier curve lies inside the hull of its control points, but the tight
//! box is usually smaller: only the endpoints and the per-axis roots of the
//! derivative inside `[0, 1]` can be extreme.

use curvekit_core::Tolerance;
use curvekit_math::{saturate3, Aabb3, Point3, Vector3};

/// Per-axis parameter where a quadratic's derivative vanishes,
/// `(P0 - P1) / (P0 - 2P1 + P2)`, saturated into `[0, 1]`.
///
/// The division happens before saturation. An axis whose denominator is zero
/// yields `±inf` (saturated to `1` or `0`) or, when the numerator is zero too,
/// NaN (saturated to `0`).
pub fn quadratic_extremum_parameters(source: Point3, control: Point3, destination: Point3) -> Vector3 {
    let t = (source - control) / (source - 2.0 * control + destination);
    if !t.is_finite() {
        log::trace!("non-finite quadratic extremum parameter {t}, saturating");
    }
    saturate3(t)
}

/// Tight axis-aligned box of the quadratic Bezier `source, control, destination`
/// over `t` in `[0, 1]`.
///
/// When `control` is inside the endpoint box the curve cannot leave it and the
/// endpoint box is returned unchanged.
pub fn quadratic_bounding_box(source: Point3, control: Point3, destination: Point3) -> Aabb3 {
    let hull = Aabb3::from_corners(source, destination);
    if hull.contains_point(control) {
        return hull;
    }

    let t = quadratic_extremum_parameters(source, control, destination);
    let s = Vector3::ONE - t;
    let q = s * s * source + 2.0 * s * t * control + t * t * destination;
    hull.encapsulate(q)
}

/// Tight axis-aligned box of a cubic Bezier over `t` in `[0, 1]`.
///
/// The derivative of each axis is a quadratic in `t`; every real root inside
/// `[0, 1]` contributes one curve point. A leading coefficient within
/// `tolerance.linear` of zero is treated as a linear derivative.
pub fn cubic_bounding_box(points: [Point3; 4], tolerance: Tolerance) -> Aabb3 {
    let [p0, p1, p2, p3] = points;
    let mut aabb = Aabb3::from_corners(p0, p3);
    if aabb.contains_point(p1) && aabb.contains_point(p2) {
        return aabb;
    }

    let d0 = p1 - p0;
    let d1 = p2 - p1;
    let d2 = p3 - p2;
    let a = d0 - 2.0 * d1 + d2;
    let b = 2.0 * (d1 - d0);
    let c = d0;

    for axis in 0..3 {
        for t in quadratic_roots(a[axis], b[axis], c[axis], tolerance)
            .into_iter()
            .flatten()
        {
            if (0.0..=1.0).contains(&t) {
                aabb = aabb.encapsulate(cubic_point(points, t));
            }
        }
    }
    aabb
}

pub(crate) fn cubic_point(points: [Point3; 4], t: f64) -> Point3 {
    let [p0, p1, p2, p3] = points;
    let t2 = t * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    // B(t) = (1-t)³P0 + 3(1-t)²tP1 + 3(1-t)t²P2 + t³P3
    mt2 * mt * p0 + 3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t2 * t * p3
}

/// Real roots of `a t² + b t + c`.
fn quadratic_roots(a: f64, b: f64, c: f64, tolerance: Tolerance) -> [Option<f64>; 2] {
    if tolerance.is_zero(a) {
        if tolerance.is_zero(b) {
            return [None, None];
        }
        return [Some(-c / b), None];
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return [None, None];
    }
    let sq = disc.sqrt();
    [Some((-b + sq) / (2.0 * a)), Some((-b - sq) / (2.0 * a))]
}
