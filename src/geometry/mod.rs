pub mod curve;

pub use curve::{
    CubicBezier, Hodograph, ParametricCurve, QuadraticBezier, SpeedProfile, UniformCubicBSpline,
};
