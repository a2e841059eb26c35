use tracing::{debug, warn};

use crate::geometry::curve::{ParametricCurve, SpeedProfile};
use crate::math::{quadrature, ArcLength};

use super::{classify, DegenerateCurve, Nondegenerate};

/// Parameters controlling arc-length table construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLengthParams {
    /// Maximum allowed error of arc-length lookups, in curve length units.
    pub tolerance: ArcLength,
    /// Upper limit on the number of table segments.
    pub max_segments: usize,
}

impl Default for ArcLengthParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_segments: 65_536,
        }
    }
}

/// One sample of the cumulative arc-length table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    /// Parameter value in `[0, 1]`.
    pub t: f64,
    /// Arc length from the start of the curve to `t`.
    pub s: ArcLength,
}

/// Computes how many equal parameter subintervals keep the piecewise-linear
/// approximation of a curve within `tolerance`.
///
/// A chord over a parameter step `Δt` deviates from the curve by at most
/// `Δt²·B/8`, where `B` bounds `|C''|`. The result is the smallest `N ≥ 1`
/// with `(1/N)²·B/8 ≤ tolerance`, so it never grows as `tolerance` grows and
/// never shrinks as `B` grows.
///
/// # Panics
///
/// Panics if `tolerance` is not positive and finite.
#[must_use]
pub fn num_approximation_segments(max_second_derivative: f64, tolerance: ArcLength) -> usize {
    assert!(
        tolerance > 0.0 && tolerance.is_finite(),
        "arc-length tolerance must be positive and finite, got {tolerance}"
    );
    if max_second_derivative.is_nan() || max_second_derivative <= 0.0 {
        return 1;
    }
    let n = (max_second_derivative / (8.0 * tolerance)).sqrt().ceil();
    // Float-to-int casts saturate, so an unbounded curve maps to usize::MAX.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = n as usize;
    n.max(1)
}

/// A curve's cumulative arc-length table, for lookups by distance.
///
/// Built once per curve and tolerance and immutable afterwards. The table
/// starts at `(0, 0)`, ends at `(1, total)`, and is nondecreasing in both
/// columns.
#[derive(Debug)]
pub struct ArcLengthParameterization<'a, C, const D: usize>
where
    C: ParametricCurve<D> + ?Sized,
{
    pub(super) curve: &'a C,
    pub(super) speed: C::Speed,
    pub(super) classification: Result<Nondegenerate<D>, DegenerateCurve<D>>,
    pub(super) tolerance: ArcLength,
    pub(super) table: Vec<TableEntry>,
}

impl<'a, C, const D: usize> ArcLengthParameterization<'a, C, D>
where
    C: ParametricCurve<D> + ?Sized,
{
    /// Builds the parameterization with the given tolerance and default limits.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not positive and finite.
    #[must_use]
    pub fn build(curve: &'a C, tolerance: ArcLength) -> Self {
        Self::build_with(
            curve,
            &ArcLengthParams {
                tolerance,
                ..ArcLengthParams::default()
            },
        )
    }

    /// Builds the parameterization from explicit parameters.
    ///
    /// Each of the `N` equal subintervals chosen by
    /// [`num_approximation_segments`] is integrated with Gauss–Legendre
    /// quadrature over the curve's speed profile, and the results are
    /// accumulated into the table.
    ///
    /// # Panics
    ///
    /// Panics if `params.tolerance` is not positive and finite, or if
    /// `params.max_segments` is zero.
    #[must_use]
    pub fn build_with(curve: &'a C, params: &ArcLengthParams) -> Self {
        assert!(params.max_segments > 0, "max_segments must be at least 1");
        let bound = curve.max_second_derivative_magnitude();
        let wanted = num_approximation_segments(bound, params.tolerance);
        let segments = if wanted > params.max_segments {
            warn!(
                wanted,
                max_segments = params.max_segments,
                tolerance = params.tolerance,
                "arc-length table capped; tolerance may not be met"
            );
            params.max_segments
        } else {
            wanted
        };

        let speed = curve.speed_profile();
        #[allow(clippy::cast_precision_loss)]
        let n = segments as f64;
        let mut table = Vec::with_capacity(segments + 1);
        table.push(TableEntry { t: 0.0, s: 0.0 });
        let mut total = 0.0;
        let mut t0 = 0.0;
        for i in 1..=segments {
            #[allow(clippy::cast_precision_loss)]
            let t1 = i as f64 / n;
            total += quadrature::integrate(|t| speed.speed(t), t0, t1);
            table.push(TableEntry { t: t1, s: total });
            t0 = t1;
        }
        debug!(
            segments,
            total,
            bound,
            tolerance = params.tolerance,
            "built arc-length table"
        );

        Self {
            curve,
            speed,
            classification: classify(curve),
            tolerance: params.tolerance,
            table,
        }
    }

    /// Returns the underlying curve.
    #[must_use]
    pub fn curve(&self) -> &'a C {
        self.curve
    }

    /// Returns the tolerance the table was built with.
    #[must_use]
    pub fn tolerance(&self) -> ArcLength {
        self.tolerance
    }

    /// Returns the cumulative table, including both endpoints.
    #[must_use]
    pub fn table(&self) -> &[TableEntry] {
        &self.table
    }

    /// Returns the number of parameter subintervals in the table.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.table.len() - 1
    }

    /// Returns the curve's tangent classification, computed at build time.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateCurve`] when the curve collapses to a point.
    pub fn classification(&self) -> Result<Nondegenerate<D>, DegenerateCurve<D>> {
        self.classification
    }
}
