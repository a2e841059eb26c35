use thiserror::Error;

/// Top-level error type for the arc-length parameterization kernel.
#[derive(Debug, Error)]
pub enum ArcParamError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("insufficient control points: need at least {required}, got {actual}")]
    InsufficientControlPoints { required: usize, actual: usize },

    #[error("control point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Convenience type alias for results using [`ArcParamError`].
pub type Result<T> = std::result::Result<T, ArcParamError>;
