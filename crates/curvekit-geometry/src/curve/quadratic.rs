//! Quadratic Bezier curve with cached endpoint tangents.

use curvekit_core::{Bounded, CurveError, Result, Tolerance, Validate};
use curvekit_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::bounds::{quadratic_bounding_box, quadratic_extremum_parameters};
use super::{CubicBezier, Curve, CurveTangents};

/// A quadratic Bezier curve from `source` to `destination`, pulled towards
/// `control`.
///
/// The endpoint tangents are derived from the three points and cached. They
/// are refreshed on construction and by [`QuadraticBezier::recompute`]; the
/// point setters leave them stale until `recompute` is called.
///
/// Coincident `source`/`control` (or `control`/`destination`) yields a NaN
/// tangent. Use [`QuadraticBezier::try_new`] to reject such input.
///
/// Only the three points are serialized. Deserializing always recomputes the
/// tangents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ControlPoints", into = "ControlPoints")]
pub struct QuadraticBezier {
    source: Point3,
    control: Point3,
    destination: Point3,
    tangent_source: Vector3,
    tangent_destination: Vector3,
}

/// Persisted form of a [`QuadraticBezier`].
#[derive(Clone, Copy, Serialize, Deserialize)]
struct ControlPoints {
    source: Point3,
    control: Point3,
    destination: Point3,
}

impl From<ControlPoints> for QuadraticBezier {
    fn from(points: ControlPoints) -> Self {
        Self::new(points.source, points.destination, points.control)
    }
}

impl From<QuadraticBezier> for ControlPoints {
    fn from(curve: QuadraticBezier) -> Self {
        Self {
            source: curve.source,
            control: curve.control,
            destination: curve.destination,
        }
    }
}

impl QuadraticBezier {
    pub fn new(source: Point3, destination: Point3, control: Point3) -> Self {
        let mut curve = Self {
            source,
            control,
            destination,
            tangent_source: Vector3::ZERO,
            tangent_destination: Vector3::ZERO,
        };
        curve.recompute();
        curve
    }

    /// Like [`QuadraticBezier::new`], but rejects curves whose endpoint
    /// tangents cannot be normalized.
    pub fn try_new(source: Point3, destination: Point3, control: Point3) -> Result<Self> {
        let curve = Self::new(source, destination, control);
        curve.validate()?;
        Ok(curve)
    }

    /// Re-derive the cached endpoint tangents from the control points.
    pub fn recompute(&mut self) {
        self.tangent_source = (self.control - self.source).normalize();
        self.tangent_destination = (self.destination - self.control).normalize();
        if !(self.tangent_source.is_finite() && self.tangent_destination.is_finite()) {
            log::debug!(
                "degenerate quadratic bezier tangent: source={} control={} destination={}",
                self.source,
                self.control,
                self.destination
            );
        }
    }

    pub fn source(&self) -> Point3 {
        self.source
    }

    pub fn control(&self) -> Point3 {
        self.control
    }

    pub fn destination(&self) -> Point3 {
        self.destination
    }

    pub fn tangent_source(&self) -> Vector3 {
        self.tangent_source
    }

    pub fn tangent_destination(&self) -> Vector3 {
        self.tangent_destination
    }

    /// Replace all three points. Call [`QuadraticBezier::recompute`] before evaluating.
    pub fn set_control_points(&mut self, source: Point3, destination: Point3, control: Point3) {
        self.source = source;
        self.destination = destination;
        self.control = control;
    }

    pub fn set_source(&mut self, source: Point3) {
        self.source = source;
    }

    pub fn set_control(&mut self, control: Point3) {
        self.control = control;
    }

    pub fn set_destination(&mut self, destination: Point3) {
        self.destination = destination;
    }

    /// Position at `t`. Not clamped: values outside `[0, 1]` extrapolate the
    /// parabola.
    pub fn evaluate(&self, t: f64) -> Point3 {
        let mt = 1.0 - t;
        // B(t) = (1-t)²P0 + 2(1-t)tP1 + t²P2
        mt * mt * self.source + 2.0 * mt * t * self.control + t * t * self.destination
    }

    /// Normalized interpolation of the two cached endpoint tangents.
    ///
    /// This matches the true direction only at `t = 0` and `t = 1`; in between
    /// it is an approximation. See [`QuadraticBezier::derivative`] for the
    /// analytic value. Opposing endpoint tangents produce NaN where the
    /// interpolation crosses zero.
    pub fn evaluate_tangent(&self, t: f64) -> Vector3 {
        self.tangent_source
            .lerp(self.tangent_destination, t)
            .normalize()
    }

    /// Analytic first derivative, `2(1-t)(P1-P0) + 2t(P2-P1)`.
    pub fn derivative(&self, t: f64) -> Vector3 {
        let mt = 1.0 - t;
        2.0 * mt * (self.control - self.source) + 2.0 * t * (self.destination - self.control)
    }

    /// Per-axis parameters of the derivative roots, saturated into `[0, 1]`.
    pub fn extremum_parameters(&self) -> Vector3 {
        quadratic_extremum_parameters(self.source, self.control, self.destination)
    }

    /// Split at `t` into two quadratics covering `[0, t]` and `[t, 1]`.
    pub fn split(&self, t: f64) -> (Self, Self) {
        // De Casteljau
        let p01 = self.source.lerp(self.control, t);
        let p12 = self.control.lerp(self.destination, t);
        let mid = p01.lerp(p12, t);
        (
            Self::new(self.source, mid, p01),
            Self::new(mid, self.destination, p12),
        )
    }

    /// Exact degree elevation.
    pub fn to_cubic(&self) -> CubicBezier {
        CubicBezier::new(
            self.source,
            self.source.lerp(self.control, 2.0 / 3.0),
            self.control.lerp(self.destination, 1.0 / 3.0),
            self.destination,
        )
    }

    pub fn validate_with(&self, tolerance: Tolerance) -> Result<()> {
        let checks = [
            ("source", "control", self.control - self.source),
            ("control", "destination", self.destination - self.control),
        ];
        for (from, to, delta) in checks {
            if tolerance.is_degenerate_length(delta.length()) {
                return Err(CurveError::Degenerate(format!(
                    "{from} and {to} coincide, tangent is undefined"
                )));
            }
        }
        Ok(())
    }
}

impl Validate for QuadraticBezier {
    fn validate(&self) -> Result<()> {
        self.validate_with(Tolerance::default())
    }
}

impl Bounded for QuadraticBezier {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Aabb3 {
        quadratic_bounding_box(self.source, self.control, self.destination)
    }
}

impl Curve for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point3 {
        self.evaluate(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.evaluate_tangent(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.source == self.destination
    }
}

impl CurveTangents for QuadraticBezier {
    fn start_tangent(&self) -> Vector3 {
        self.tangent_source
    }

    fn end_tangent(&self) -> Vector3 {
        self.tangent_destination
    }
}
