use crate::geometry::curve::{ParametricCurve, SpeedProfile};
use crate::math::{quadrature, ArcLength, Direction, ParameterValue, Point, TOLERANCE};

use super::ArcLengthParameterization;

/// Newton refinement steps applied after interpolating inside a bracket.
const NEWTON_STEPS: usize = 3;

impl<C, const D: usize> ArcLengthParameterization<'_, C, D>
where
    C: ParametricCurve<D> + ?Sized,
{
    /// Returns the total arc length of the curve.
    #[must_use]
    pub fn arc_length(&self) -> ArcLength {
        self.table.last().map_or(0.0, |e| e.s)
    }

    /// Arc length from `t = 0` to `t`.
    ///
    /// Exact at table nodes; between nodes the speed is integrated from the
    /// bracket's lower node.
    #[must_use]
    pub fn parameter_value_to_arc_length(&self, t: ParameterValue) -> ArcLength {
        let t = t.get();
        let lo = self.table[self.bracket_by_parameter(t)];
        lo.s + self.integrate_speed(lo.t, t)
    }

    /// Parameter value at which the arc length from the start equals `distance`.
    ///
    /// Returns `None` if `distance` is negative, NaN, or beyond the total length.
    #[must_use]
    pub fn arc_length_to_parameter_value(&self, distance: ArcLength) -> Option<ParameterValue> {
        let total = self.arc_length();
        if !(0.0..=total).contains(&distance) {
            return None;
        }
        if distance >= total {
            return Some(ParameterValue::ONE);
        }
        // First entry whose accumulated length reaches `distance`.
        let j = self.table.partition_point(|e| e.s < distance);
        if j == 0 {
            return Some(ParameterValue::ZERO);
        }
        let (lo, hi) = (self.table[j - 1], self.table[j]);

        // lo.s < distance <= hi.s, so the span is positive.
        let fraction = (distance - lo.s) / (hi.s - lo.s);
        let mut t = lo.t * (1.0 - fraction) + hi.t * fraction;
        for _ in 0..NEWTON_STEPS {
            let speed = self.speed.speed(t);
            if speed <= TOLERANCE {
                break;
            }
            let residual = lo.s + self.integrate_speed(lo.t, t) - distance;
            let next = (t - residual / speed).clamp(lo.t, hi.t);
            let step = (next - t).abs();
            t = next;
            if step <= f64::EPSILON {
                break;
            }
        }
        Some(ParameterValue::clamped(t))
    }

    /// Point at arc length `distance` from the start.
    #[must_use]
    pub fn point_along(&self, distance: ArcLength) -> Option<Point<D>> {
        self.arc_length_to_parameter_value(distance)
            .map(|t| self.curve.position(t))
    }

    /// Unit tangent at arc length `distance` from the start.
    ///
    /// Returns `None` for an out-of-range distance or a curve that collapses
    /// to a single point.
    #[must_use]
    pub fn tangent_direction_along(&self, distance: ArcLength) -> Option<Direction<D>> {
        let class = self.classification.ok()?;
        let t = self.arc_length_to_parameter_value(distance)?;
        Some(class.tangent_direction(self.curve, t))
    }

    /// Point and unit tangent at arc length `distance` from the start.
    #[must_use]
    pub fn sample_along(&self, distance: ArcLength) -> Option<(Point<D>, Direction<D>)> {
        let class = self.classification.ok()?;
        let t = self.arc_length_to_parameter_value(distance)?;
        Some((self.curve.position(t), class.tangent_direction(self.curve, t)))
    }

    /// Returns `count` points (at least 2) spaced evenly by arc length, from
    /// the start of the curve to its end.
    #[must_use]
    pub fn sample_evenly(&self, count: usize) -> Vec<Point<D>> {
        let count = count.max(2);
        let total = self.arc_length();
        #[allow(clippy::cast_precision_loss)]
        let last = (count - 1) as f64;
        (0..count)
            .filter_map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let fraction = i as f64 / last;
                self.point_along(total * fraction)
            })
            .collect()
    }

    /// Index `i` of the table bracket with `t_i <= t <= t_{i+1}`.
    fn bracket_by_parameter(&self, t: f64) -> usize {
        let i = self.table.partition_point(|e| e.t <= t);
        i.saturating_sub(1).min(self.segment_count() - 1)
    }

    fn integrate_speed(&self, a: f64, b: f64) -> ArcLength {
        quadrature::integrate(|u| self.speed.speed(u), a, b)
    }
}
