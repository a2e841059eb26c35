mod bezier;
mod bspline;
mod hodograph;

pub use bezier::{CubicBezier, QuadraticBezier};
pub use bspline::UniformCubicBSpline;
pub use hodograph::Hodograph;

use crate::math::{Direction, ParameterValue, Point, Vector};

/// Largest distance from `first` to any point of `rest`.
fn extent_from<const D: usize>(first: &Point<D>, rest: &[Point<D>]) -> f64 {
    rest.iter().map(|p| (p - first).norm()).fold(0.0, f64::max)
}
use crate::parameterization::{classify, DegenerateCurve, Nondegenerate};

/// The magnitude of a curve's first derivative as a function of the parameter.
///
/// Implementors hold whatever they can precompute from the control points so
/// that repeated evaluation during integration stays cheap.
pub trait SpeedProfile {
    /// Returns `|C'(t)|` for `t` in `[0, 1]`.
    fn speed(&self, t: f64) -> f64;
}

/// Evaluation contract for parametric curves over `t ∈ [0, 1]`.
///
/// Every curve type in the crate implements this; classification, tangent
/// resolution and arc-length parameterization are written against it only.
pub trait ParametricCurve<const D: usize> {
    /// Precomputed speed profile returned by [`ParametricCurve::speed_profile`].
    type Speed: SpeedProfile;

    /// Evaluates the curve at `t`.
    fn position(&self, t: ParameterValue) -> Point<D>;

    /// Evaluates `C'(t)`.
    fn first_derivative(&self, t: ParameterValue) -> Vector<D>;

    /// Evaluates `C''(t)`.
    fn second_derivative(&self, t: ParameterValue) -> Vector<D>;

    /// Returns `C'''`, which is constant for curves up to cubic degree.
    ///
    /// Curves of lower degree report the zero vector.
    fn third_derivative(&self) -> Vector<D>;

    /// Returns an upper bound on `|C''(t)|` over the whole domain.
    ///
    /// Computed from the control points, never by sampling.
    fn max_second_derivative_magnitude(&self) -> f64;

    /// Returns the curve's speed profile.
    fn speed_profile(&self) -> Self::Speed;

    /// Returns the largest distance from the first control point to any other.
    ///
    /// Zero exactly when the curve collapses to a single point. Used to judge
    /// when a derivative is zero up to rounding.
    fn control_extent(&self) -> f64;

    /// Classifies which derivative order yields a reliable tangent.
    ///
    /// # Errors
    ///
    /// Returns the collapsed point as [`DegenerateCurve`] if every derivative vanishes.
    fn classify(&self) -> Result<Nondegenerate<D>, DegenerateCurve<D>> {
        classify(self)
    }

    /// Returns the unit tangent at `t`, resolving cusps with the
    /// [`Nondegenerate::tangent_direction`] policy.
    ///
    /// Returns `None` for a curve that collapses to a single point.
    ///
    /// Classifies the curve on every call. When querying many parameters,
    /// call [`ParametricCurve::classify`] once and use
    /// [`Nondegenerate::tangent_direction`] directly.
    fn tangent_direction(&self, t: ParameterValue) -> Option<Direction<D>> {
        self.classify()
            .ok()
            .map(|class| class.tangent_direction(self, t))
    }
}
