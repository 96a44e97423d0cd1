//! Cubic Bezier curve.

use curvekit_core::{Bounded, Tolerance};
use curvekit_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::bounds::{cubic_bounding_box, cubic_point};
use super::{Curve, CurveTangents};

/// A cubic Bezier curve leaving `source` towards `control_source` and
/// arriving at `destination` from `control_destination`.
///
/// Unlike [`super::QuadraticBezier`] nothing is cached, so the points may be
/// edited freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub source: Point3,
    pub control_source: Point3,
    pub control_destination: Point3,
    pub destination: Point3,
}

impl CubicBezier {
    pub fn new(
        source: Point3,
        control_source: Point3,
        control_destination: Point3,
        destination: Point3,
    ) -> Self {
        Self {
            source,
            control_source,
            control_destination,
            destination,
        }
    }

    fn points(&self) -> [Point3; 4] {
        [
            self.source,
            self.control_source,
            self.control_destination,
            self.destination,
        ]
    }

    pub fn evaluate(&self, t: f64) -> Point3 {
        cubic_point(self.points(), t)
    }

    /// Analytic first derivative.
    pub fn derivative(&self, t: f64) -> Vector3 {
        let mt = 1.0 - t;
        // B'(t) = 3(1-t)²(P1-P0) + 6(1-t)t(P2-P1) + 3t²(P3-P2)
        3.0 * mt * mt * (self.control_source - self.source)
            + 6.0 * mt * t * (self.control_destination - self.control_source)
            + 3.0 * t * t * (self.destination - self.control_destination)
    }

    /// Split at `t` into two cubics covering `[0, t]` and `[t, 1]`.
    pub fn split(&self, t: f64) -> (Self, Self) {
        // De Casteljau
        let p01 = self.source.lerp(self.control_source, t);
        let p12 = self.control_source.lerp(self.control_destination, t);
        let p23 = self.control_destination.lerp(self.destination, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let mid = p012.lerp(p123, t);
        (
            Self::new(self.source, p01, p012, mid),
            Self::new(mid, p123, p23, self.destination),
        )
    }

    pub fn bounding_box_with(&self, tolerance: Tolerance) -> Aabb3 {
        cubic_bounding_box(self.points(), tolerance)
    }
}

impl Bounded for CubicBezier {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Aabb3 {
        self.bounding_box_with(Tolerance::default())
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        self.evaluate(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.derivative(t).normalize()
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.source == self.destination
    }
}

impl CurveTangents for CubicBezier {
    fn start_tangent(&self) -> Vector3 {
        (self.control_source - self.source).normalize()
    }

    fn end_tangent(&self) -> Vector3 {
        (self.destination - self.control_destination).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvekit_math::DVec3;

    fn s_curve() -> CubicBezier {
        CubicBezier::new(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(2.0, -2.0, 1.0),
            DVec3::new(3.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_cubic_endpoints() {
        let curve = s_curve();
        assert_eq!(curve.evaluate(0.0), curve.source);
        assert_eq!(curve.evaluate(1.0), curve.destination);
    }

    #[test]
    fn test_cubic_tangent_endpoints() {
        let curve = s_curve();
        assert!((curve.tangent_at(0.0) - curve.start_tangent()).length() < 1e-12);
        assert!((curve.tangent_at(1.0) - curve.end_tangent()).length() < 1e-12);
    }

    #[test]
    fn test_cubic_derivative_matches_finite_difference() {
        let curve = s_curve();
        let h = 1e-6;
        for &t in &[0.2, 0.5, 0.8] {
            let fd = (curve.evaluate(t + h) - curve.evaluate(t - h)) / (2.0 * h);
            assert!((fd - curve.derivative(t)).length() < 1e-6);
        }
    }

    #[test]
    fn test_cubic_split() {
        let curve = s_curve();
        let (left, right) = curve.split(0.3);
        assert!((left.destination - curve.evaluate(0.3)).length() < 1e-12);
        assert!((left.evaluate(0.5) - curve.evaluate(0.15)).length() < 1e-12);
        assert!((right.evaluate(0.5) - curve.evaluate(0.65)).length() < 1e-12);
    }

    #[test]
    fn test_cubic_bounds_contain_samples() {
        let curve = s_curve();
        let aabb = curve.bounding_box().expand(1e-12);
        for i in 0..=200 {
            assert!(aabb.contains_point(curve.evaluate(i as f64 / 200.0)));
        }
    }
}
