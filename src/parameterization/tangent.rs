use nalgebra::Unit;

use crate::geometry::curve::ParametricCurve;
use crate::math::{try_direction, Direction, ParameterValue};

use super::Nondegenerate;

impl<const D: usize> Nondegenerate<D> {
    /// Resolves the unit tangent of `curve` at `t`.
    ///
    /// Where `C'(t)` is exactly zero (a cusp or reversal point), the next
    /// derivative's direction is used instead; any nonzero `C'(t)`, however
    /// small, gives the tangent itself. The incoming and outgoing
    /// tangents at a cusp are opposite; the outgoing one is reported, except
    /// at `t = 1` where nothing departs and the fallback is reversed to give
    /// the incoming tangent.
    ///
    /// `curve` must be the curve this classification was computed from.
    #[must_use]
    pub fn tangent_direction<C>(&self, curve: &C, t: ParameterValue) -> Direction<D>
    where
        C: ParametricCurve<D> + ?Sized,
    {
        match *self {
            Self::FirstDerivativeConstant(d1) => d1,
            Self::SecondDerivativeConstant(d2) => {
                try_direction(curve.first_derivative(t)).unwrap_or_else(|| orient(d2, t))
            }
            Self::ThirdDerivativeConstant(d3) => try_direction(curve.first_derivative(t))
                .or_else(|| try_direction(curve.second_derivative(t)).map(|d2| orient(d2, t)))
                .unwrap_or(d3),
        }
    }

    /// Returns the carried fallback direction.
    #[must_use]
    pub fn fallback_direction(&self) -> Direction<D> {
        match *self {
            Self::FirstDerivativeConstant(d)
            | Self::SecondDerivativeConstant(d)
            | Self::ThirdDerivativeConstant(d) => d,
        }
    }
}

/// Reverses `d` at the terminal parameter.
fn orient<const D: usize>(d: Direction<D>, t: ParameterValue) -> Direction<D> {
    if t.is_end() {
        Unit::new_unchecked(-d.into_inner())
    } else {
        d
    }
}
