//! Analytic bound on where roots of an exponential sum can lie.

use super::Interval;
use crate::curve::{Curve, Term};

/// Interval outside of which the curve has no root.
///
/// For large `x` the highest-exponent term outgrows every term with a
/// lower exponent. Once it is at least `k` times larger than each of the
/// `k` terms of opposite sign, it outweighs all of them together and the
/// sum keeps its sign. Each such term `t` gives the crossover
///
/// ```text
/// x_t = ln(k * |t.A / hi.A|) / (hi.B - t.B)
/// ```
///
/// and the upper bound is the largest `x_t`. The lower bound is the mirror
/// image anchored on the lowest-exponent term, taking the smallest `x_t`.
///
/// A side with no opposite-signed term is unconstrained (`±∞`); in that
/// case every term has the sign of the anchor and the curve has no root at
/// all. Zero coefficients are ignored. The returned interval may be
/// empty (`max < min`) when no root exists.
///
/// # Example
///
/// ```
/// use expsum_core::curve::{Curve, Term};
/// use expsum_core::isolation::bound_range;
///
/// // exp(x) - 14 crosses zero exactly at ln(14); both bounds meet there.
/// let curve = Curve::new(vec![Term::new(1.0, 1.0), Term::new(-14.0, 0.0)]).unwrap();
/// let bound = bound_range(&curve);
/// assert!((bound.max - 14.0_f64.ln()).abs() < 1e-12);
/// assert!((bound.min - 14.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn bound_range(curve: &Curve) -> Interval {
    let normalized = curve.normalized();
    let (Some(lowest), Some(highest)) = (normalized.lowest(), normalized.highest()) else {
        return Interval::unbounded();
    };
    let terms = normalized.terms();

    let max = crossovers(terms, highest)
        .reduce(f64::max)
        .unwrap_or(f64::INFINITY);
    let min = crossovers(terms, lowest)
        .reduce(f64::min)
        .unwrap_or(f64::NEG_INFINITY);

    Interval::new(min, max)
}

/// Crossover points of `anchor` against each opposite-signed term.
fn crossovers<'a>(terms: &'a [Term], anchor: &'a Term) -> impl Iterator<Item = f64> + 'a {
    let opposing = terms.iter().filter(|t| t.opposes(anchor)).count() as f64;
    terms.iter().filter(|t| t.opposes(anchor)).map(move |t| {
        (opposing * (t.coefficient / anchor.coefficient).abs()).ln()
            / (anchor.exponent - t.exponent)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve(terms: &[(f64, f64)]) -> Curve {
        Curve::new(terms.iter().map(|&t| Term::from(t)).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_two_term_bounds_meet_at_root() {
        let c = curve(&[(5.0, -1.0 / 1.5), (-2.0, 0.0)]);
        let bound = bound_range(&c);
        assert_relative_eq!(bound.min, 1.3744360978112327, epsilon = 1e-12);
        assert_relative_eq!(bound.max, 1.3744360978112327, epsilon = 1e-12);
    }

    #[test]
    fn test_order_of_terms_does_not_matter() {
        let a = curve(&[(-2.0, 0.0), (0.01, 0.2), (5.0, -1.0 / 1.5), (-1.0, 0.1)]);
        let b = curve(&[(5.0, -1.0 / 1.5), (-2.0, 0.0), (-1.0, 0.1), (0.01, 0.2)]);
        assert_eq!(bound_range(&a), bound_range(&b));
    }

    #[test]
    fn test_upper_bound_uses_count_of_opposing_terms() {
        // hi = 0.01 exp(x/5) against -2 and -1 exp(x/10): k = 2.
        let c = curve(&[(-2.0, 0.0), (-1.0, 0.1), (0.01, 0.2)]);
        let bound = bound_range(&c);
        let from_constant = (2.0_f64 * 2.0 / 0.01).ln() / 0.2;
        let from_linear = (2.0_f64 * 1.0 / 0.01).ln() / 0.1;
        assert_relative_eq!(bound.max, from_constant.max(from_linear), epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_contain_known_roots() {
        let c = curve(&[
            (5.0, -1.0 / 1.5),
            (-40.0, -1.0 / 1.3),
            (1000.0, -1.0 / 1.2),
            (-2.0, 0.0),
            (-1.0, 1.0 / 10.0),
            (0.01, 1.0 / 5.0),
        ]);
        let bound = bound_range(&c);
        assert!(bound.contains(6.600359570724455));
        assert!(bound.contains(46.245955278726214));
    }

    #[test]
    fn test_same_sign_curve_is_unconstrained() {
        let c = curve(&[(1.0, 1.0), (2.0, 0.0), (0.5, -1.0)]);
        assert_eq!(bound_range(&c), Interval::unbounded());
    }

    #[test]
    fn test_empty_curve_is_unconstrained() {
        assert_eq!(bound_range(&Curve::default()), Interval::unbounded());
    }

    #[test]
    fn test_zero_coefficient_extreme_is_ignored() {
        // The 0 * exp(3x) term must not become the anchor.
        let c = curve(&[(0.0, 3.0), (1.0, 1.0), (-14.0, 0.0)]);
        let bound = bound_range(&c);
        assert_relative_eq!(bound.max, 14.0_f64.ln(), epsilon = 1e-12);
    }
}
