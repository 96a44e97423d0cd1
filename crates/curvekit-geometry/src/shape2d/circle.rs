use curvekit_core::Bounded;
use curvekit_math::{Aabb2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{Shape2D, ShapeDimension};

/// A planar disc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle2 {
    pub center: Point2,
    pub radius: f64,
}

impl Circle2 {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        (p - self.center).length_squared() <= self.radius * self.radius
    }
}

impl ShapeDimension<Point2> for Circle2 {
    fn center(&self) -> Point2 {
        self.center
    }
}

impl Shape2D for Circle2 {
    /// A zero direction has no farthest point; the center is returned.
    fn support_point(&self, direction: Vector2) -> Point2 {
        self.center + direction.normalize_or_zero() * self.radius
    }
}

impl Bounded for Circle2 {
    type Bounds = Aabb2;

    fn bounding_box(&self) -> Aabb2 {
        let r = Vector2::splat(self.radius);
        Aabb2::new(self.center - r, self.center + r)
    }
}
