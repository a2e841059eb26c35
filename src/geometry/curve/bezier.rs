use crate::math::{lerp, ParameterValue, Point, Vector};

use super::{extent_from, Hodograph, ParametricCurve};

/// A quadratic Bézier curve defined by 3 control points.
///
/// `B(t) = (1-t)²P₀ + 2(1-t)tP₁ + t²P₂`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier<const D: usize> {
    points: [Point<D>; 3],
}

impl<const D: usize> QuadraticBezier<D> {
    /// Creates a new quadratic Bézier curve.
    #[must_use]
    pub fn new(p0: Point<D>, p1: Point<D>, p2: Point<D>) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point<D>; 3] {
        &self.points
    }

    /// Returns the derivative curve.
    #[must_use]
    pub fn hodograph(&self) -> Hodograph<D> {
        let [p0, p1, p2] = &self.points;
        Hodograph::new((p1 - p0) * 2.0, p2 - p0, (p2 - p1) * 2.0)
    }

    /// Splits the curve at `t` by de Casteljau subdivision.
    ///
    /// The left half covers `[0, t]` and the right half `[t, 1]`; both are
    /// reparameterized to `[0, 1]`.
    #[must_use]
    pub fn split_at(&self, t: ParameterValue) -> (Self, Self) {
        let t = t.get();
        let [p0, p1, p2] = &self.points;
        let p01 = lerp(p0, p1, t);
        let p12 = lerp(p1, p2, t);
        let p012 = lerp(&p01, &p12, t);
        (Self::new(*p0, p01, p012), Self::new(p012, p12, *p2))
    }

    /// Splits the curve at `t = 0.5`.
    #[must_use]
    pub fn bisect(&self) -> (Self, Self) {
        self.split_at(ParameterValue::clamped(0.5))
    }

    /// Returns the same curve traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [p0, p1, p2] = self.points;
        Self::new(p2, p1, p0)
    }

    /// Returns the curve moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector<D>) -> Self {
        Self {
            points: self.points.map(|p| p + offset),
        }
    }

    /// Raises the curve to an equivalent cubic.
    #[must_use]
    pub fn elevate(&self) -> CubicBezier<D> {
        let [p0, p1, p2] = &self.points;
        CubicBezier::new(
            *p0,
            lerp(p0, p1, 2.0 / 3.0),
            lerp(p2, p1, 2.0 / 3.0),
            *p2,
        )
    }
}

impl<const D: usize> ParametricCurve<D> for QuadraticBezier<D> {
    type Speed = Hodograph<D>;

    fn position(&self, t: ParameterValue) -> Point<D> {
        let t = t.get();
        let [p0, p1, p2] = &self.points;
        lerp(&lerp(p0, p1, t), &lerp(p1, p2, t), t)
    }

    fn first_derivative(&self, t: ParameterValue) -> Vector<D> {
        let t = t.get();
        let s = 1.0 - t;
        let [p0, p1, p2] = &self.points;
        // B'(t) = 2(1-t)(P₁-P₀) + 2t(P₂-P₁)
        (p1 - p0) * (2.0 * s) + (p2 - p1) * (2.0 * t)
    }

    fn second_derivative(&self, _t: ParameterValue) -> Vector<D> {
        let [p0, p1, p2] = &self.points;
        (p2.coords - p1.coords * 2.0 + p0.coords) * 2.0
    }

    fn third_derivative(&self) -> Vector<D> {
        Vector::zeros()
    }

    fn max_second_derivative_magnitude(&self) -> f64 {
        self.second_derivative(ParameterValue::ZERO).norm()
    }

    fn speed_profile(&self) -> Hodograph<D> {
        self.hodograph()
    }

    fn control_extent(&self) -> f64 {
        let [p0, rest @ ..] = &self.points;
        extent_from(p0, rest)
    }
}

/// A cubic Bézier curve defined by 4 control points.
///
/// `B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃`
///
/// Positions and subdivision both go through repeated linear interpolation
/// (de Casteljau), so a split point and the evaluated point agree bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier<const D: usize> {
    points: [Point<D>; 4],
}

impl<const D: usize> CubicBezier<D> {
    /// Creates a new cubic Bézier curve.
    #[must_use]
    pub fn new(p0: Point<D>, p1: Point<D>, p2: Point<D>, p3: Point<D>) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point<D>; 4] {
        &self.points
    }

    /// Returns the derivative curve `3·(P₁-P₀, P₂-P₁, P₃-P₂)`.
    #[must_use]
    pub fn hodograph(&self) -> Hodograph<D> {
        let [p0, p1, p2, p3] = &self.points;
        Hodograph::new((p1 - p0) * 3.0, (p2 - p1) * 3.0, (p3 - p2) * 3.0)
    }

    /// Runs the de Casteljau pyramid at `t`, returning
    /// `[p01, p12, p23, p012, p123, p0123]`.
    fn de_casteljau(&self, t: f64) -> [Point<D>; 6] {
        let [p0, p1, p2, p3] = &self.points;
        let p01 = lerp(p0, p1, t);
        let p12 = lerp(p1, p2, t);
        let p23 = lerp(p2, p3, t);
        let p012 = lerp(&p01, &p12, t);
        let p123 = lerp(&p12, &p23, t);
        let p0123 = lerp(&p012, &p123, t);
        [p01, p12, p23, p012, p123, p0123]
    }

    /// Splits the curve at `t`, returning the halves covering `[0, t]` and `[t, 1]`.
    #[must_use]
    pub fn split_at(&self, t: ParameterValue) -> (Self, Self) {
        let [p0, _, _, p3] = self.points;
        let [p01, _, p23, p012, p123, p0123] = self.de_casteljau(t.get());
        (
            Self::new(p0, p01, p012, p0123),
            Self::new(p0123, p123, p23, p3),
        )
    }

    /// Splits the curve at `t = 0.5`.
    #[must_use]
    pub fn bisect(&self) -> (Self, Self) {
        self.split_at(ParameterValue::clamped(0.5))
    }

    /// Returns the same curve traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [p0, p1, p2, p3] = self.points;
        Self::new(p3, p2, p1, p0)
    }

    /// Returns the curve moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector<D>) -> Self {
        Self {
            points: self.points.map(|p| p + offset),
        }
    }
}

impl<const D: usize> ParametricCurve<D> for CubicBezier<D> {
    type Speed = Hodograph<D>;

    fn position(&self, t: ParameterValue) -> Point<D> {
        self.de_casteljau(t.get())[5]
    }

    fn first_derivative(&self, t: ParameterValue) -> Vector<D> {
        self.hodograph().derivative(t.get())
    }

    fn second_derivative(&self, t: ParameterValue) -> Vector<D> {
        let t = t.get();
        let [p0, p1, p2, p3] = &self.points;
        // B''(t) = 6(1-t)(P₂ - 2P₁ + P₀) + 6t(P₃ - 2P₂ + P₁)
        let a = p2.coords - p1.coords * 2.0 + p0.coords;
        let b = p3.coords - p2.coords * 2.0 + p1.coords;
        a * (6.0 * (1.0 - t)) + b * (6.0 * t)
    }

    fn third_derivative(&self) -> Vector<D> {
        let [p0, p1, p2, p3] = &self.points;
        (p3.coords - p2.coords * 3.0 + p1.coords * 3.0 - p0.coords) * 6.0
    }

    fn max_second_derivative_magnitude(&self) -> f64 {
        self.hodograph().max_second_derivative_magnitude()
    }

    fn speed_profile(&self) -> Hodograph<D> {
        self.hodograph()
    }

    fn control_extent(&self) -> f64 {
        let [p0, rest @ ..] = &self.points;
        extent_from(p0, rest)
    }
}
