//! Debug drawing for curvekit curves.
//!
//! Nothing here touches the geometry it draws; callers hand in curves by
//! reference and a [`GizmoSink`] that forwards to their renderer.

pub mod draw;
pub mod sink;

pub use draw::{draw_aabb, draw_cubic, draw_curve, draw_quadratic, DEFAULT_DENSITY, HANDLE_RADIUS};
pub use sink::{palette, Color, CommandRecorder, GizmoCommand, GizmoSink};
