use approx::assert_relative_eq;
use curvekit_core::traits::{Bounded, Validate};
use curvekit_core::CurveError;
use curvekit_geometry::curve::bounds::quadratic_bounding_box;
use curvekit_geometry::{Curve, QuadraticBezier};
use curvekit_math::{dvec3, Aabb3, DVec3};

fn sample_curves() -> Vec<QuadraticBezier> {
    vec![
        QuadraticBezier::new(dvec3(0.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0), dvec3(1.0, 2.0, 0.0)),
        QuadraticBezier::new(dvec3(-3.0, 1.0, 4.0), dvec3(5.0, -2.0, 0.5), dvec3(0.0, 7.0, -1.0)),
        QuadraticBezier::new(dvec3(1.0, 1.0, 1.0), dvec3(1.0, 5.0, 1.0), dvec3(4.0, 3.0, -2.0)),
        QuadraticBezier::new(dvec3(0.1, 0.2, 0.3), dvec3(0.9, 0.8, 0.7), dvec3(0.5, 0.5, 0.5)),
    ]
}

#[test]
fn test_endpoint_interpolation_is_exact() {
    for curve in sample_curves() {
        assert_eq!(curve.evaluate(0.0), curve.source());
        assert_eq!(curve.evaluate(1.0), curve.destination());
    }
}

#[test]
fn test_midpoint_uses_basis_weights() {
    for curve in sample_curves() {
        let expected = 0.25 * curve.source() + 0.5 * curve.control() + 0.25 * curve.destination();
        assert!((curve.evaluate(0.5) - expected).length() < 1e-12);
    }
}

#[test]
fn test_tangent_endpoints_follow_control_polygon() {
    for curve in sample_curves() {
        let start = (curve.control() - curve.source()).normalize();
        let end = (curve.destination() - curve.control()).normalize();
        assert!((curve.evaluate_tangent(0.0) - start).length() < 1e-12);
        assert!((curve.evaluate_tangent(1.0) - end).length() < 1e-12);
    }
}

#[test]
fn test_bounding_box_is_idempotent() {
    for curve in sample_curves() {
        assert_eq!(curve.bounding_box(), curve.bounding_box());
    }
}

#[test]
fn test_bounding_box_contains_curve_samples() {
    for curve in sample_curves() {
        let aabb = curve.bounding_box();
        aabb.validate().unwrap();
        let grown = aabb.expand(1e-12);
        for i in 0..=256 {
            assert!(grown.contains_point(curve.evaluate(i as f64 / 256.0)));
        }
    }
}

#[test]
fn test_control_inside_hull_returns_exact_hull() {
    let curve = QuadraticBezier::new(dvec3(0.1, 0.2, 0.3), dvec3(0.9, 0.8, 0.7), dvec3(0.5, 0.5, 0.5));
    let aabb = curve.bounding_box();
    assert_eq!(aabb, Aabb3::new(dvec3(0.1, 0.2, 0.3), dvec3(0.9, 0.8, 0.7)));
}

#[test]
fn test_arch_scenario() {
    let curve = QuadraticBezier::new(dvec3(0.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0), dvec3(1.0, 2.0, 0.0));

    assert_eq!(curve.extremum_parameters(), dvec3(0.0, 0.5, 0.0));
    assert_eq!(curve.evaluate(0.5), dvec3(1.0, 1.0, 0.0));

    let aabb = curve.bounding_box();
    assert_eq!(aabb.min, dvec3(0.0, 0.0, 0.0));
    assert_eq!(aabb.max, dvec3(2.0, 1.0, 0.0));
}

#[test]
fn test_collinear_scenario() {
    let curve = QuadraticBezier::new(dvec3(0.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0));
    let aabb = curve.bounding_box();
    assert_eq!(aabb.min, dvec3(0.0, 0.0, 0.0));
    assert_eq!(aabb.max, dvec3(2.0, 0.0, 0.0));
    assert!((curve.evaluate_tangent(0.3) - DVec3::X).length() < 1e-12);
}

#[test]
fn test_coincident_source_and_control_yield_nan_tangent() {
    let p = dvec3(2.0, -1.0, 0.5);
    let curve = QuadraticBezier::new(p, dvec3(4.0, 0.0, 0.0), p);
    assert!(curve.tangent_source().is_nan());
    assert!(curve.tangent_at(0.0).is_nan());
    assert!(matches!(curve.validate(), Err(CurveError::Degenerate(_))));

    // Bounds stay finite: control sits on the endpoint hull.
    let aabb = curve.bounding_box();
    assert!(aabb.min.is_finite() && aabb.max.is_finite());
}

#[test]
fn test_free_function_matches_method() {
    for curve in sample_curves() {
        assert_eq!(
            quadratic_bounding_box(curve.source(), curve.control(), curve.destination()),
            curve.bounding_box()
        );
    }
}

#[test]
fn test_serialization_persists_only_control_points() {
    let curve = sample_curves()[1];
    let json = serde_json::to_value(curve).unwrap();
    let object = json.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["control", "destination", "source"]);
}

#[test]
fn test_deserialization_recomputes_tangents() {
    let json = r#"{"source":[0.0,0.0,0.0],"control":[0.0,3.0,0.0],"destination":[4.0,3.0,0.0]}"#;
    let curve: QuadraticBezier = serde_json::from_str(json).unwrap();
    assert!((curve.tangent_source() - DVec3::Y).length() < 1e-12);
    assert!((curve.tangent_destination() - DVec3::X).length() < 1e-12);
    assert_relative_eq!(curve.evaluate(0.5).x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(curve.evaluate(0.5).y, 2.25, epsilon = 1e-12);
}
