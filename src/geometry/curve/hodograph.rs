use crate::math::Vector;

use super::SpeedProfile;

/// The derivative curve of a Bézier, stored as a quadratic Bernstein polynomial.
///
/// `C'(t) = (1-t)²·h₀ + 2(1-t)t·h₁ + t²·h₂`
///
/// The coefficients are the scaled control-point differences, computed once
/// when the hodograph is built. A quadratic Bézier's linear hodograph is
/// stored in degree-elevated form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hodograph<const D: usize> {
    coeffs: [Vector<D>; 3],
}

impl<const D: usize> Hodograph<D> {
    /// Creates a hodograph from its three Bernstein coefficients.
    #[must_use]
    pub fn new(h0: Vector<D>, h1: Vector<D>, h2: Vector<D>) -> Self {
        Self {
            coeffs: [h0, h1, h2],
        }
    }

    /// Returns the Bernstein coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[Vector<D>; 3] {
        &self.coeffs
    }

    /// Evaluates the first derivative of the underlying curve at `t`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector<D> {
        let s = 1.0 - t;
        let [h0, h1, h2] = &self.coeffs;
        h0 * (s * s) + h1 * (2.0 * s * t) + h2 * (t * t)
    }

    /// Evaluates the second derivative of the underlying curve at `t`.
    #[must_use]
    pub fn second_derivative(&self, t: f64) -> Vector<D> {
        let [h0, h1, h2] = &self.coeffs;
        ((h1 - h0) * (1.0 - t) + (h2 - h1) * t) * 2.0
    }

    /// Returns the (constant) third derivative of the underlying curve.
    #[must_use]
    pub fn third_derivative(&self) -> Vector<D> {
        let [h0, h1, h2] = &self.coeffs;
        (h2 - h1 * 2.0 + h0) * 2.0
    }

    /// Bound on `|C''|`: the second derivative is linear in `t`, so its
    /// norm is maximized at an endpoint.
    #[must_use]
    pub fn max_second_derivative_magnitude(&self) -> f64 {
        let [h0, h1, h2] = &self.coeffs;
        2.0 * (h1 - h0).norm().max((h2 - h1).norm())
    }
}

impl<const D: usize> SpeedProfile for Hodograph<D> {
    fn speed(&self, t: f64) -> f64 {
        self.derivative(t).norm()
    }
}
