//! curvekit geometry: parametric curves, bounding volumes, and 2D shapes.

pub mod curve;
pub mod shape2d;
pub mod tessellate;

pub use curve::{CubicBezier, Curve, CurveTangents, Line, QuadraticBezier};
pub use shape2d::{Circle2, ConvexPolygon2, Convex2D, Segment2, Shape2D, ShapeDimension};
