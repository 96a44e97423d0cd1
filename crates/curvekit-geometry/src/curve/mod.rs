//! Curve traits and implementations.

pub mod bounds;
mod cubic;
mod line;
mod quadratic;

use curvekit_math::{Point3, Vector3};

pub use cubic::CubicBezier;
pub use line::Line;
pub use quadratic::QuadraticBezier;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Unit direction of travel at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}

/// Curves that expose their endpoint directions without evaluating.
pub trait CurveTangents: Curve {
    fn start_tangent(&self) -> Vector3;
    fn end_tangent(&self) -> Vector3;
}
