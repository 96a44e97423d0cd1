//! Line segment curve.

use curvekit_core::Bounded;
use curvekit_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Curve, CurveTangents};

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point3,
    pub end: Point3,
}

impl Line {
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> Point3 {
        self.start + t * (self.end - self.start)
    }

    /// Constant direction; NaN for a zero-length segment.
    fn tangent_at(&self, _t: f64) -> Vector3 {
        (self.end - self.start).normalize()
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl CurveTangents for Line {
    fn start_tangent(&self) -> Vector3 {
        self.tangent_at(0.0)
    }

    fn end_tangent(&self) -> Vector3 {
        self.tangent_at(1.0)
    }
}

impl Bounded for Line {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_corners(self.start, self.end)
    }
}
