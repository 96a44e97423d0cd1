use curvekit_core::Bounded;
use curvekit_math::{Aabb2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{Shape2D, ShapeDimension};

/// A planar line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Unit direction from `start` to `end`; NaN when the segment is a point.
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }

    pub fn midpoint(&self) -> Point2 {
        (self.start + self.end) * 0.5
    }

    /// Outward normal for a counter-clockwise vertex loop.
    pub fn normal(&self) -> Vector2 {
        let d = self.direction();
        Vector2::new(d.y, -d.x)
    }
}

impl ShapeDimension<Point2> for Segment2 {
    fn center(&self) -> Point2 {
        self.midpoint()
    }
}

impl Shape2D for Segment2 {
    fn support_point(&self, direction: Vector2) -> Point2 {
        if self.end.dot(direction) > self.start.dot(direction) {
            self.end
        } else {
            self.start
        }
    }
}

impl Bounded for Segment2 {
    type Bounds = Aabb2;

    fn bounding_box(&self) -> Aabb2 {
        Aabb2::new(self.start.min(self.end), self.start.max(self.end))
    }
}
