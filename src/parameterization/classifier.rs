use crate::geometry::curve::ParametricCurve;
use crate::math::{try_direction_scaled, Direction, ParameterValue, Point, Vector};

/// Which derivative order yields a reliable tangent for a curve.
///
/// The carried direction is a fallback, used only at parameters where every
/// lower-order derivative vanishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nondegenerate<const D: usize> {
    /// `C'` is a nonzero constant: the curve is a straight, evenly
    /// parameterized segment and this is its tangent everywhere.
    FirstDerivativeConstant(Direction<D>),
    /// `C''` is a nonzero constant (quadratic-or-lower); its direction is
    /// used where `C'` vanishes.
    SecondDerivativeConstant(Direction<D>),
    /// `C'''` is nonzero (true cubic); its direction is used where both
    /// `C'` and `C''` vanish.
    ThirdDerivativeConstant(Direction<D>),
}

/// A curve whose every derivative vanishes: all control points coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateCurve<const D: usize> {
    /// The single point the curve collapses to.
    pub point: Point<D>,
}

/// Classifies `curve` by the lowest-order derivative that can stand in for
/// the tangent when `C'` vanishes.
///
/// Fixed cascade: third derivative, then second, then first. The lower
/// derivatives are constant once the higher ones are zero, so each is
/// sampled at `t = 0`. A derivative counts as zero when it is within
/// rounding of zero relative to the curve's
/// [`control_extent`](ParametricCurve::control_extent).
///
/// # Errors
///
/// Returns [`DegenerateCurve`] carrying the collapsed point when the first
/// derivative is zero as well.
pub fn classify<C, const D: usize>(curve: &C) -> Result<Nondegenerate<D>, DegenerateCurve<D>>
where
    C: ParametricCurve<D> + ?Sized,
{
    let scale = curve.control_extent();
    let direction = |v: Vector<D>| try_direction_scaled(v, scale);
    let class = if let Some(d3) = direction(curve.third_derivative()) {
        Nondegenerate::ThirdDerivativeConstant(d3)
    } else if let Some(d2) = direction(curve.second_derivative(ParameterValue::ZERO)) {
        Nondegenerate::SecondDerivativeConstant(d2)
    } else if let Some(d1) = direction(curve.first_derivative(ParameterValue::ZERO)) {
        Nondegenerate::FirstDerivativeConstant(d1)
    } else {
        let point = curve.position(ParameterValue::ZERO);
        tracing::trace!(?point, "curve collapses to a single point");
        return Err(DegenerateCurve { point });
    };
    tracing::trace!(?class, "classified curve");
    Ok(class)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{CubicBezier, QuadraticBezier};
    use crate::math::{Point2, Point3, Vector2, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Point3::new(2.0, -1.0, 0.5);
        let c = CubicBezier::new(p, p, p, p);
        assert_eq!(classify(&c), Err(DegenerateCurve { point: p }));
        assert_eq!(c.classify(), Err(DegenerateCurve { point: p }));
    }

    #[test]
    fn evenly_spaced_line_is_first_order() {
        let c = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        );
        let Ok(Nondegenerate::FirstDerivativeConstant(d)) = classify(&c) else {
            panic!("expected first-order classification");
        };
        let expected = Vector2::new(1.0, 1.0).normalize();
        assert_relative_eq!(d.into_inner(), expected, epsilon = 1e-12);
    }

    #[test]
    fn unevenly_spaced_line_is_second_order() {
        // Collinear but the speed varies, so C'' is a nonzero constant along the line.
        let c = QuadraticBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        );
        let Ok(Nondegenerate::SecondDerivativeConstant(d)) = classify(&c) else {
            panic!("expected second-order classification");
        };
        assert_relative_eq!(d.into_inner(), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn elevated_quadratic_stays_second_order() {
        let q = QuadraticBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        assert!(matches!(
            classify(&q.elevate()),
            Ok(Nondegenerate::SecondDerivativeConstant(_))
        ));
    }

    #[test]
    fn true_cubic_is_third_order() {
        let c = CubicBezier::new(
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(3.0, 1.0, 1.0),
            Point3::new(3.0, 3.0, 1.0),
            Point3::new(3.0, 3.0, 3.0),
        );
        let Ok(Nondegenerate::ThirdDerivativeConstant(d)) = classify(&c) else {
            panic!("expected third-order classification");
        };
        let raw = c.third_derivative();
        assert_relative_eq!(d.into_inner(), raw / raw.norm(), epsilon = 1e-12);
    }

    #[test]
    fn tiny_line_is_not_degenerate() {
        let c = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1e-11, 0.0),
            Point2::new(2e-11, 0.0),
            Point2::new(3e-11, 0.0),
        );
        let Ok(Nondegenerate::FirstDerivativeConstant(d)) = classify(&c) else {
            panic!("expected first-order classification");
        };
        assert_relative_eq!(d.into_inner(), Vector2::x(), epsilon = 1e-12);
    }

    #[test]
    fn classification_does_not_depend_on_size() {
        let c = CubicBezier::new(
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(3.0, 1.0, 1.0),
            Point3::new(3.0, 3.0, 1.0),
            Point3::new(3.0, 3.0, 3.0),
        );
        for scale in [1e-12, 1e-6, 1.0, 1e6] {
            let [p0, p1, p2, p3] = *c.control_points();
            let scaled = CubicBezier::new(p0 * scale, p1 * scale, p2 * scale, p3 * scale);
            assert!(
                matches!(classify(&scaled), Ok(Nondegenerate::ThirdDerivativeConstant(_))),
                "scale={scale}"
            );
            let q = QuadraticBezier::new(p0 * scale, p1 * scale, p3 * scale);
            assert!(
                matches!(classify(&q.elevate()), Ok(Nondegenerate::SecondDerivativeConstant(_))),
                "scale={scale}"
            );
        }
    }
}
