use std::f64::consts::TAU;

use curvekit_core::{Bounded, CurveError, Result, Tolerance, Validate};
use curvekit_math::{Aabb2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{farthest_along, Convex2D, Shape2D, ShapeDimension};

/// A convex polygon with counter-clockwise vertices.
///
/// Serialized as its vertex list; deserializing validates it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2>", into = "Vec<Point2>")]
pub struct ConvexPolygon2 {
    vertices: Vec<Point2>,
}

impl ConvexPolygon2 {
    /// Build a polygon from a vertex loop in either winding.
    ///
    /// Clockwise input is reversed. Fails for fewer than three vertices,
    /// non-finite coordinates, zero area, a reflex corner, or a loop that
    /// winds around more than once.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        Self::with_tolerance(vertices, Tolerance::default())
    }

    pub fn with_tolerance(mut vertices: Vec<Point2>, tolerance: Tolerance) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(CurveError::InvalidShape(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }
        let polygon = Self { vertices };
        polygon.validate_with(tolerance)?;
        Ok(polygon)
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        self.edges()
            .iter()
            .all(|edge| cross(edge.end - edge.start, p - edge.start) >= 0.0)
    }

    pub fn validate_with(&self, tolerance: Tolerance) -> Result<()> {
        if let Some(p) = self.vertices.iter().find(|p| !p.is_finite()) {
            return Err(CurveError::InvalidShape(format!("non-finite vertex {p}")));
        }
        if tolerance.is_zero(self.area()) {
            return Err(CurveError::InvalidShape("polygon has zero area".into()));
        }
        let n = self.vertices.len();
        let mut turning = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let (incoming, outgoing) = (b - a, c - b);
            let turn = cross(incoming, outgoing);
            if turn < -tolerance.linear {
                return Err(CurveError::InvalidShape(format!(
                    "reflex corner at vertex {}",
                    (i + 1) % n
                )));
            }
            turning += turn.atan2(incoming.dot(outgoing));
        }
        // Every corner turns left, so anything but one full turn is a star or
        // a loop traced more than once.
        if !tolerance.angular_eq(turning, TAU) {
            return Err(CurveError::InvalidShape(format!(
                "vertex loop winds {:.3} turns, expected 1",
                turning / TAU
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<Point2>> for ConvexPolygon2 {
    type Error = CurveError;

    fn try_from(vertices: Vec<Point2>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<ConvexPolygon2> for Vec<Point2> {
    fn from(polygon: ConvexPolygon2) -> Self {
        polygon.vertices
    }
}

fn cross(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Shoelace area, positive for counter-clockwise loops.
fn signed_area(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| cross(vertices[i], vertices[(i + 1) % n]))
        .sum();
    twice * 0.5
}

impl Validate for ConvexPolygon2 {
    fn validate(&self) -> Result<()> {
        self.validate_with(Tolerance::default())
    }
}

impl ShapeDimension<Point2> for ConvexPolygon2 {
    /// Mean of the vertices.
    fn center(&self) -> Point2 {
        let sum: Point2 = self.vertices.iter().copied().sum();
        sum / self.vertices.len() as f64
    }
}

impl Shape2D for ConvexPolygon2 {
    fn support_point(&self, direction: Vector2) -> Point2 {
        // Construction guarantees at least three vertices.
        farthest_along(&self.vertices, direction).unwrap_or(self.vertices[0])
    }
}

impl Convex2D for ConvexPolygon2 {
    fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
}

impl Bounded for ConvexPolygon2 {
    type Bounds = Aabb2;

    fn bounding_box(&self) -> Aabb2 {
        let first = self.vertices[0];
        self.vertices
            .iter()
            .fold(Aabb2::new(first, first), |aabb, &p| aabb.encapsulate(p))
    }
}
