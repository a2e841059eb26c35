mod parameter;
pub mod quadrature;

pub use parameter::ParameterValue;

use nalgebra::{SVector, Unit};

/// Point in `D`-dimensional space.
pub type Point<const D: usize> = nalgebra::Point<f64, D>;

/// Vector in `D`-dimensional space.
pub type Vector<const D: usize> = SVector<f64, D>;

/// Unit-length vector in `D`-dimensional space.
pub type Direction<const D: usize> = Unit<SVector<f64, D>>;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Distance measured along a curve, in the curve's length units.
pub type ArcLength = f64;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Normalizes `v`, returning `None` only for an exactly zero vector.
#[must_use]
pub fn try_direction<const D: usize>(v: Vector<D>) -> Option<Direction<D>> {
    Unit::try_new(v, 0.0)
}

/// Normalizes `v`, returning `None` when its length is within [`TOLERANCE`]
/// of zero relative to `scale`.
///
/// `scale` is the size of the geometry `v` was derived from, so rounding
/// residue is rejected at any size while a zero `scale` still only rejects
/// the zero vector.
#[must_use]
pub fn try_direction_scaled<const D: usize>(v: Vector<D>, scale: f64) -> Option<Direction<D>> {
    Unit::try_new(v, TOLERANCE * scale)
}

/// Linear interpolation between two points.
///
/// Written as `(1 - t) * a + t * b` so both endpoints are reproduced exactly.
#[must_use]
pub fn lerp<const D: usize>(a: &Point<D>, b: &Point<D>, t: f64) -> Point<D> {
    Point::from(a.coords * (1.0 - t) + b.coords * t)
}
