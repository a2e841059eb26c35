/// Nodes and weights of the 5-point Gauss–Legendre rule on `[-1, 1]`.
const GAUSS_LEGENDRE_5: [(f64, f64); 5] = [
    (0.568_888_888_888_888_9, 0.0),
    (0.478_628_670_499_366_5, -0.538_469_310_105_683_1),
    (0.478_628_670_499_366_5, 0.538_469_310_105_683_1),
    (0.236_926_885_056_189_1, -0.906_179_845_938_664_0),
    (0.236_926_885_056_189_1, 0.906_179_845_938_664_0),
];

/// Integrates `f` over `[a, b]` with the 5-point Gauss–Legendre rule.
///
/// Exact for polynomials up to degree 9. Returns `0` for an empty interval and
/// a negated value when `b < a`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn integrate<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return 0.0;
    }
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    half * GAUSS_LEGENDRE_5
        .iter()
        .map(|&(w, x)| w * f(mid + half * x))
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weights_sum_to_interval_length() {
        assert_relative_eq!(integrate(|_| 1.0, 0.0, 1.0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(integrate(|_| 1.0, 2.0, 5.0), 3.0, epsilon = 1e-14);
    }

    #[test]
    fn exact_for_degree_nine() {
        // ∫₀¹ x⁹ dx = 1/10
        assert_relative_eq!(integrate(|x| x.powi(9), 0.0, 1.0), 0.1, epsilon = 1e-14);
    }

    #[test]
    fn reversed_interval_negates() {
        let forward = integrate(|x| x * x, 0.0, 2.0);
        let backward = integrate(|x| x * x, 2.0, 0.0);
        assert_relative_eq!(forward, 8.0 / 3.0, epsilon = 1e-14);
        assert_relative_eq!(backward, -forward, epsilon = 1e-14);
    }

    #[test]
    fn smooth_non_polynomial() {
        assert_relative_eq!(
            integrate(f64::sin, 0.0, std::f64::consts::FRAC_PI_2),
            1.0,
            epsilon = 1e-9
        );
    }
}
