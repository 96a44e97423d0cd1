//! Planar shapes queried through support points.

mod circle;
mod polygon;
mod segment;

use curvekit_math::{Point2, Vector2};

pub use circle::Circle2;
pub use polygon::ConvexPolygon2;
pub use segment::Segment2;

/// A shape living in the vector space `V`.
pub trait ShapeDimension<V> {
    fn center(&self) -> V;
}

/// A planar shape that can report its farthest point along a direction.
pub trait Shape2D: ShapeDimension<Point2> {
    /// The point of the shape maximizing `dot(point, direction)`.
    fn support_point(&self, direction: Vector2) -> Point2;
}

/// A convex planar shape with a finite vertex loop.
pub trait Convex2D: Shape2D {
    fn vertices(&self) -> &[Point2];

    /// Edges in vertex order, closing back to the first vertex.
    fn edges(&self) -> Vec<Segment2> {
        let vertices = self.vertices();
        let n = vertices.len();
        (0..n)
            .map(|i| Segment2::new(vertices[i], vertices[(i + 1) % n]))
            .collect()
    }
}

/// Farthest of `points` along `direction`. Ties keep the first candidate.
pub(crate) fn farthest_along(points: &[Point2], direction: Vector2) -> Option<Point2> {
    let (&first, rest) = points.split_first()?;
    let mut best = first;
    let mut best_dot = first.dot(direction);
    for &p in rest {
        let d = p.dot(direction);
        if d > best_dot {
            best = p;
            best_dot = d;
        }
    }
    Some(best)
}
