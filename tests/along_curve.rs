#![allow(clippy::unwrap_used)]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use arcparam::math::{Point2, Point3, Vector3};
use arcparam::parameterization::num_approximation_segments;
use arcparam::{
    ArcLengthParameterization, ArcLengthParams, CubicBezier, DegenerateCurve, Nondegenerate,
    ParameterValue, ParametricCurve, QuadraticBezier, UniformCubicBSpline,
};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn scenario_curve() -> CubicBezier<3> {
    CubicBezier::new(
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(3.0, 1.0, 1.0),
        Point3::new(3.0, 3.0, 1.0),
        Point3::new(3.0, 3.0, 3.0),
    )
}

#[test]
fn walking_by_distance_differs_from_walking_by_parameter() {
    init_tracing();
    let curve = scenario_curve();
    let along = ArcLengthParameterization::build(&curve, 1e-4);

    assert_abs_diff_eq!(along.arc_length(), 4.3303, epsilon = 1e-4);

    let by_distance = along.point_along(along.arc_length() / 4.0).unwrap();
    let by_parameter = curve.position(ParameterValue::new(0.25).unwrap());
    assert_abs_diff_eq!(
        by_distance.coords,
        Vector3::new(2.0425, 1.2431, 1.0206),
        epsilon = 1e-4
    );
    assert_abs_diff_eq!(
        by_parameter.coords,
        Vector3::new(2.1563, 1.3125, 1.0313),
        epsilon = 1e-4
    );
}

#[test]
fn halves_sum_to_whole() {
    init_tracing();
    let curve = scenario_curve();
    let (left, right) = curve.bisect();
    let mid = curve.position(ParameterValue::new(0.5).unwrap());
    assert_eq!(left.position(ParameterValue::ONE), mid);
    assert_eq!(right.position(ParameterValue::ZERO), mid);

    let whole = ArcLengthParameterization::build(&curve, 1e-6).arc_length();
    let l = ArcLengthParameterization::build(&left, 1e-6).arc_length();
    let r = ArcLengthParameterization::build(&right, 1e-6).arc_length();
    assert_relative_eq!(l + r, whole, epsilon = 1e-9);

    // The midpoint by parameter sits at the left half's length along the whole.
    let along = ArcLengthParameterization::build(&curve, 1e-6);
    let t = along.arc_length_to_parameter_value(l).unwrap();
    assert_relative_eq!(t.get(), 0.5, epsilon = 1e-9);
}

#[test]
fn tighter_tolerance_never_uses_fewer_segments() {
    let curve = scenario_curve();
    let mut prev = 0;
    for tol in [1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6] {
        let along = ArcLengthParameterization::build(&curve, tol);
        assert!(along.segment_count() >= prev);
        assert_eq!(
            along.segment_count(),
            num_approximation_segments(curve.max_second_derivative_magnitude(), tol)
        );
        prev = along.segment_count();
    }
}

#[test]
fn coincident_control_points_are_degenerate() {
    let p = Point2::new(-1.0, 4.0);
    let curve = CubicBezier::new(p, p, p, p);
    assert_eq!(curve.classify(), Err(DegenerateCurve { point: p }));

    let along = ArcLengthParameterization::build(&curve, 1e-4);
    assert_eq!(along.arc_length(), 0.0);
    assert!(along.sample_along(0.0).is_none());
}

#[test]
fn end_cusp_reports_incoming_tangent_along() {
    init_tracing();
    let curve = CubicBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 1.0),
    );
    assert!(matches!(
        curve.classify(),
        Ok(Nondegenerate::ThirdDerivativeConstant(_))
    ));
    let along = ArcLengthParameterization::build(&curve, 1e-5);
    let (end, tangent) = along.sample_along(along.arc_length()).unwrap();
    assert_eq!(end, Point2::new(1.0, 1.0));
    // Arrives travelling along +x from (0, 1).
    assert_relative_eq!(tangent.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(tangent.y, 0.0, epsilon = 1e-12);
}

#[test]
fn bspline_spans_parameterize_independently() {
    let spline = UniformCubicBSpline::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 2.0, 0.0),
        Point3::new(3.0, 2.0, 1.0),
        Point3::new(4.0, 0.0, 1.0),
        Point3::new(6.0, -1.0, 0.0),
        Point3::new(7.0, 1.0, 0.0),
    ])
    .unwrap();
    let params = ArcLengthParams {
        tolerance: 1e-5,
        ..ArcLengthParams::default()
    };
    let segments = spline.segments();
    assert_eq!(segments.len(), spline.segment_count());
    for seg in &segments {
        let along = ArcLengthParameterization::build_with(seg, &params);
        let chord = (seg.position(ParameterValue::ONE) - seg.position(ParameterValue::ZERO)).norm();
        assert!(along.arc_length() >= chord);
        let s = along.arc_length() * 0.3;
        let t = along.arc_length_to_parameter_value(s).unwrap();
        assert!((along.parameter_value_to_arc_length(t) - s).abs() <= params.tolerance);
    }
}

#[test]
fn quadratic_and_its_elevation_agree() {
    let q = QuadraticBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 3.0),
        Point2::new(4.0, 0.0),
    );
    let c = q.elevate();
    let lq = ArcLengthParameterization::build(&q, 1e-6);
    let lc = ArcLengthParameterization::build(&c, 1e-6);
    assert_relative_eq!(lq.arc_length(), lc.arc_length(), epsilon = 1e-9);
    let pq = lq.point_along(1.7).unwrap();
    let pc = lc.point_along(1.7).unwrap();
    assert_relative_eq!(pq.coords, pc.coords, epsilon = 1e-8);
}
