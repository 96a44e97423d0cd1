use curvekit_geometry::tessellate::sample_uniform;
use curvekit_geometry::{CubicBezier, Curve, QuadraticBezier};
use curvekit_math::Aabb3;

use crate::sink::{palette, GizmoSink};

/// Polyline segments used when the caller has no preference.
pub const DEFAULT_DENSITY: usize = 64;

/// Radius of the spheres marking curve points.
pub const HANDLE_RADIUS: f64 = 0.05;

/// Draw `curve` as a polyline of `density` segments in the current color.
pub fn draw_curve(curve: &dyn Curve, sink: &mut dyn GizmoSink, density: usize) {
    let points = sample_uniform(curve, density);
    for w in points.windows(2) {
        sink.draw_line(w[0], w[1]);
    }
}

/// Source in green, destination in blue, the control point in red with
/// handle lines to both ends, then the curve in white.
pub fn draw_quadratic(curve: &QuadraticBezier, sink: &mut dyn GizmoSink, density: usize) {
    sink.set_color(palette::GREEN);
    sink.draw_wire_sphere(curve.source(), HANDLE_RADIUS);
    sink.draw_line(curve.source(), curve.control());
    sink.draw_line(curve.destination(), curve.control());
    sink.set_color(palette::BLUE);
    sink.draw_wire_sphere(curve.destination(), HANDLE_RADIUS);
    sink.set_color(palette::RED);
    sink.draw_wire_sphere(curve.control(), HANDLE_RADIUS);
    sink.set_color(palette::WHITE);
    draw_curve(curve, sink, density);
}

/// Like [`draw_quadratic`], each end's handle line going to its own control.
pub fn draw_cubic(curve: &CubicBezier, sink: &mut dyn GizmoSink, density: usize) {
    sink.set_color(palette::GREEN);
    sink.draw_wire_sphere(curve.source, HANDLE_RADIUS);
    sink.draw_line(curve.source, curve.control_source);
    sink.draw_line(curve.destination, curve.control_destination);
    sink.set_color(palette::BLUE);
    sink.draw_wire_sphere(curve.destination, HANDLE_RADIUS);
    sink.set_color(palette::RED);
    sink.draw_wire_sphere(curve.control_source, HANDLE_RADIUS);
    sink.draw_wire_sphere(curve.control_destination, HANDLE_RADIUS);
    sink.set_color(palette::WHITE);
    draw_curve(curve, sink, density);
}

/// Draw the 12 edges of `aabb` in the current color.
pub fn draw_aabb(aabb: &Aabb3, sink: &mut dyn GizmoSink) {
    let c = aabb.corners();
    // Corner index bits select max on x, y, z; an edge flips exactly one bit.
    for i in 0..8 {
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                sink.draw_line(c[i], c[i | bit]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CommandRecorder, GizmoCommand};
    use curvekit_math::DVec3;

    fn arch() -> QuadraticBezier {
        QuadraticBezier::new(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
        )
    }

    #[test]
    fn test_draw_curve_segment_count() {
        let mut rec = CommandRecorder::new();
        draw_curve(&arch(), &mut rec, 8);
        let lines: Vec<_> = rec.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].0, DVec3::ZERO);
        assert_eq!(lines[7].1, DVec3::new(2.0, 0.0, 0.0));
        // Consecutive segments share endpoints.
        for w in lines.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
    }

    #[test]
    fn test_draw_quadratic_handles() {
        let curve = arch();
        let mut rec = CommandRecorder::new();
        draw_quadratic(&curve, &mut rec, DEFAULT_DENSITY);

        assert_eq!(rec.commands[0], GizmoCommand::Color(palette::GREEN));
        let spheres: Vec<_> = rec.spheres().collect();
        assert_eq!(
            spheres,
            vec![
                (curve.source(), HANDLE_RADIUS),
                (curve.destination(), HANDLE_RADIUS),
                (curve.control(), HANDLE_RADIUS),
            ]
        );
        // Two handle lines plus the polyline.
        assert_eq!(rec.lines().count(), 2 + DEFAULT_DENSITY);

        let white = rec
            .commands
            .iter()
            .position(|c| *c == GizmoCommand::Color(palette::WHITE))
            .unwrap();
        assert!(rec.commands[white + 1..]
            .iter()
            .all(|c| matches!(c, GizmoCommand::Line { .. })));
    }

    #[test]
    fn test_draw_cubic_handles() {
        let curve = arch().to_cubic();
        let mut rec = CommandRecorder::new();
        draw_cubic(&curve, &mut rec, 16);
        assert_eq!(rec.spheres().count(), 4);
        assert_eq!(rec.lines().count(), 2 + 16);
        let (from, to) = rec.lines().nth(1).unwrap();
        assert_eq!(from, curve.destination);
        assert_eq!(to, curve.control_destination);
    }

    #[test]
    fn test_draw_aabb_edges() {
        let aabb = Aabb3::new(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0));
        let mut rec = CommandRecorder::new();
        draw_aabb(&aabb, &mut rec);
        let lines: Vec<_> = rec.lines().collect();
        assert_eq!(lines.len(), 12);
        for (from, to) in lines {
            let diff = to - from;
            let moved_axes = [diff.x, diff.y, diff.z].iter().filter(|d| **d != 0.0).count();
            assert_eq!(moved_axes, 1);
        }
        rec.clear();
        assert!(rec.commands.is_empty());
    }
}
