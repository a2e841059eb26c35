use crate::error::{GeometryError, Result};

/// A curve parameter constrained to `[0, 1]`.
///
/// `0` is the start of the curve and `1` is its end. The only operation
/// defined between two parameter values is [`ParameterValue::interpolate`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ParameterValue(f64);

impl ParameterValue {
    /// The start of the curve.
    pub const ZERO: Self = Self(0.0);

    /// The end of the curve.
    pub const ONE: Self = Self(1.0);

    /// Creates a parameter value, rejecting anything outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `t` is outside
    /// `[0, 1]` or NaN.
    pub fn new(t: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&t) {
            Ok(Self(t))
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: 1.0,
            }
            .into())
        }
    }

    /// Creates a parameter value by clamping `t` into `[0, 1]`. NaN maps to `0`.
    #[must_use]
    pub fn clamped(t: f64) -> Self {
        if t.is_nan() {
            Self::ZERO
        } else {
            Self(t.clamp(0.0, 1.0))
        }
    }

    /// Returns the raw scalar.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the value `fraction` of the way from `a` to `b`.
    ///
    /// `fraction` is clamped to `[0, 1]`, so the result stays inside the domain.
    #[must_use]
    pub fn interpolate(a: Self, b: Self, fraction: f64) -> Self {
        let f = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self::clamped(a.0 * (1.0 - f) + b.0 * f)
    }

    /// Returns whether this is the terminal parameter `t = 1`.
    #[must_use]
    pub fn is_end(self) -> bool {
        self.0 >= 1.0
    }
}

impl From<ParameterValue> for f64 {
    fn from(t: ParameterValue) -> Self {
        t.0
    }
}

impl TryFrom<f64> for ParameterValue {
    type Error = crate::error::ArcParamError;

    fn try_from(t: f64) -> Result<Self> {
        Self::new(t)
    }
}
