use crate::error::{GeometryError, Result};
use crate::math::Point;

use super::CubicBezier;

/// A uniform cubic B-spline.
///
/// Each run of four consecutive control points defines one span. Spans are
/// exposed as [`CubicBezier`] segments, which is where evaluation,
/// classification and arc-length parameterization happen.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformCubicBSpline<const D: usize> {
    control_points: Vec<Point<D>>,
}

impl<const D: usize> UniformCubicBSpline<D> {
    /// Creates a B-spline from its control points.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 4 control points are given or any
    /// coordinate is not finite.
    pub fn new(control_points: Vec<Point<D>>) -> Result<Self> {
        if control_points.len() < 4 {
            return Err(GeometryError::InsufficientControlPoints {
                required: 4,
                actual: control_points.len(),
            }
            .into());
        }
        if let Some(index) = control_points
            .iter()
            .position(|p| p.coords.iter().any(|c| !c.is_finite()))
        {
            return Err(GeometryError::NonFiniteCoordinate { index }.into());
        }
        Ok(Self { control_points })
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point<D>] {
        &self.control_points
    }

    /// Returns the number of spans.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.control_points.len() - 3
    }

    /// Returns span `index` converted to Bézier form, or `None` past the last span.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<CubicBezier<D>> {
        let end = index.checked_add(4)?;
        self.control_points.get(index..end).map(span_to_bezier)
    }

    /// Returns every span in Bézier form, in order.
    #[must_use]
    pub fn segments(&self) -> Vec<CubicBezier<D>> {
        self.control_points.windows(4).map(span_to_bezier).collect()
    }
}

/// Converts four uniform B-spline control points into the Bézier form of their span.
fn span_to_bezier<const D: usize>(window: &[Point<D>]) -> CubicBezier<D> {
    let (q0, q1, q2, q3) = (
        window[0].coords,
        window[1].coords,
        window[2].coords,
        window[3].coords,
    );
    CubicBezier::new(
        Point::from((q0 + q1 * 4.0 + q2) / 6.0),
        Point::from((q1 * 2.0 + q2) / 3.0),
        Point::from((q1 + q2 * 2.0) / 3.0),
        Point::from((q1 + q2 * 4.0 + q3) / 6.0),
    )
}
