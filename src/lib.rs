pub mod error;
pub mod geometry;
pub mod math;
pub mod parameterization;

pub use error::{ArcParamError, GeometryError, Result};
pub use geometry::{CubicBezier, ParametricCurve, QuadraticBezier, UniformCubicBSpline};
pub use math::{ArcLength, Direction, ParameterValue};
pub use parameterization::{
    classify, ArcLengthParameterization, ArcLengthParams, DegenerateCurve, Nondegenerate,
};
