//! Root isolation by walking down derivative orders.

use super::{bound_range, Diagnostic, Interval, IsolationConfig, RootList, RootMethod};
use crate::curve::{Curve, Term};
use crate::math::solvers::{bisection, BrentSolver, RootEstimate};
use crate::types::{IsolationError, SolverError};
use tracing::{debug, warn};

/// Find every root of `curve` in `[x_min, x_max]` with the default
/// [`IsolationConfig`].
///
/// See [`find_all_roots_with`] for the algorithm and error conditions.
///
/// # Example
///
/// ```
/// use expsum_core::curve::{Curve, Term};
/// use expsum_core::isolation::find_all_roots;
///
/// // 0.01 exp(x/5) - exp(x/10) + 23 dips below zero between two roots.
/// let curve = Curve::new(vec![
///     Term::new(0.01, 0.2),
///     Term::new(-1.0, 0.1),
///     Term::new(23.0, 0.0),
/// ])
/// .unwrap();
/// let found = find_all_roots(0.0, 100.0, &curve).unwrap();
/// assert_eq!(found.len(), 2);
/// for &root in &found {
///     assert!(curve.evaluate(root).abs() < 1e-11);
/// }
/// ```
pub fn find_all_roots(x_min: f64, x_max: f64, curve: &Curve) -> Result<RootList, IsolationError> {
    find_all_roots_with(x_min, x_max, curve, &IsolationConfig::default())
}

/// Find every root of `curve` in `[x_min, x_max]`.
///
/// The requested range is first clipped to [`bound_range`]. The search then
/// looks for the lowest derivative order `N` whose extreme term dominates
/// all opposite-signed terms over the whole range; that derivative keeps one
/// sign, so the `N-1`-th derivative has at most one root there. Walking from
/// order `N-1` down to the curve itself, each interval whose ends differ in
/// sign holds exactly one root of the current derivative; it is located with
/// the configured root finder and the interval is split there. At order 0
/// the split points are the roots.
///
/// Infinite ends are allowed. Soft failures (a search running out of
/// iterations, a degenerate or inverted bound, no dominant order) are reported in
/// [`RootList::diagnostics`] and logged with `warn!`.
///
/// # Errors
///
/// * `IsolationError::InvalidConfig` - non-positive tolerance or a zero
///   iteration budget
/// * `IsolationError::NonFiniteRange` - either end is NaN, or the range is
///   still unbounded after clipping
pub fn find_all_roots_with(
    x_min: f64,
    x_max: f64,
    curve: &Curve,
    config: &IsolationConfig,
) -> Result<RootList, IsolationError> {
    config.validate()?;
    if x_min.is_nan() || x_max.is_nan() {
        return Err(IsolationError::NonFiniteRange { x_min, x_max });
    }
    let requested = Interval::new(x_min, x_max);
    let curve = curve.normalized();
    let tolerance = config.tolerance;

    if !curve.has_sign_change() {
        debug!(terms = curve.len(), "coefficients share one sign, no roots");
        return Ok(RootList::empty(requested));
    }

    let bound = bound_range(&curve);
    let range = requested.intersect(&bound);
    debug!(
        bound_min = bound.min,
        bound_max = bound.max,
        x_min = range.min,
        x_max = range.max,
        "roots are bounded"
    );

    if bound.max < bound.min - point_slack(tolerance, bound) {
        return Ok(crossed(&curve, requested, bound, config));
    }
    let slack = point_slack(tolerance, range);
    if range.max < range.min - slack {
        debug!("requested range lies outside the bound, no roots");
        return Ok(RootList::empty(range));
    }
    if !range.is_finite() {
        return Err(IsolationError::NonFiniteRange { x_min, x_max });
    }
    if (range.max - range.min).abs() <= slack {
        return Ok(collapsed(&curve, range, slack, config));
    }

    let mut diagnostics = Vec::new();
    let dominant_order = dominant_order(&curve, range, config.max_derivative_order);
    let top = match dominant_order {
        Some(order) => {
            debug!(order, "derivative has constant sign over the range");
            order - 1
        }
        None => {
            let diagnostic = Diagnostic::NoDominantOrder {
                max_order: config.max_derivative_order,
            };
            warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
            0
        }
    };

    let mut candidates = vec![range];
    let mut roots = Vec::new();
    for order in (0..=top).rev() {
        let derived = curve.derivative(order);
        let mut next = Vec::with_capacity(candidates.len() + 1);

        for interval in candidates {
            let y_low = derived.evaluate(interval.min);
            let y_high = derived.evaluate(interval.max);

            if !(y_low * y_high < 0.0) {
                if order == 0 {
                    roots.extend(
                        [(interval.min, y_low), (interval.max, y_high)]
                            .into_iter()
                            .filter(|&(_, y)| y == 0.0)
                            .map(|(x, _)| x),
                    );
                }
                next.push(interval);
                continue;
            }

            let estimate = match locate(&derived, interval, config) {
                Ok(estimate) => estimate,
                Err(err) => {
                    warn!(order, error = %err, "root search rejected a bracketed interval");
                    next.push(interval);
                    continue;
                }
            };
            debug!(
                order,
                x = estimate.x,
                iterations = estimate.iterations,
                "split at derivative root"
            );

            if !estimate.converged {
                let diagnostic = Diagnostic::NonConvergence {
                    order,
                    estimate: estimate.x,
                    residual: estimate.residual,
                    iterations: estimate.iterations,
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            } else if order == 0 {
                roots.push(estimate.x);
            }

            next.push(Interval::new(interval.min, estimate.x));
            next.push(Interval::new(estimate.x, interval.max));
        }

        candidates = next;
    }

    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|later, earlier| (*later - *earlier).abs() <= tolerance);

    Ok(RootList {
        roots,
        searched: range,
        dominant_order,
        diagnostics,
    })
}

/// Width under which an interval counts as a single point.
///
/// The absolute `tolerance`, widened to a few ulps of the larger finite end:
/// the two sides of a bound that meets at a root may land a few ulps apart,
/// in either order, and that gap grows with `|x|`.
fn point_slack(tolerance: f64, interval: Interval) -> f64 {
    let scale = interval.min.abs().max(interval.max.abs());
    if scale.is_finite() {
        tolerance.max(8.0 * f64::EPSILON * scale)
    } else {
        tolerance
    }
}

/// Range narrowed to a single point `p`: the curve can only vanish there.
///
/// `step` must move `p` by at least one ulp; [`point_slack`] guarantees it.
fn collapsed(curve: &Curve, range: Interval, step: f64, config: &IsolationConfig) -> RootList {
    let p = range.midpoint();
    let mut found = RootList::empty(range);

    let below = curve.evaluate(p - step);
    let above = curve.evaluate(p + step);
    if !(below * above < 0.0) {
        let diagnostic = Diagnostic::DegenerateBound { x: p };
        warn!("{}", diagnostic);
        found.diagnostics.push(diagnostic);
        return found;
    }

    if curve.evaluate(p).abs() < config.tolerance {
        found.roots.push(p);
        return found;
    }

    solve_into(&mut found, curve, Interval::new(p - step, p + step), config);
    found
}

/// Bound sides crossed by more than rounding: no point can be a root.
///
/// The gap between the two sides is still checked for a sign change. A root
/// found there is returned together with [`Diagnostic::InvertedBound`].
fn crossed(
    curve: &Curve,
    requested: Interval,
    bound: Interval,
    config: &IsolationConfig,
) -> RootList {
    let mut found = RootList::empty(requested.intersect(&bound));
    let gap = Interval::new(bound.max, bound.min).intersect(&requested);
    if gap.is_empty() {
        debug!("bound sides cross, no roots");
        return found;
    }

    let y_low = curve.evaluate(gap.min);
    let y_high = curve.evaluate(gap.max);
    if !(y_low * y_high <= 0.0) {
        debug!(
            y_low,
            y_high, "bound sides cross and the curve keeps its sign, no roots"
        );
        return found;
    }

    let diagnostic = Diagnostic::InvertedBound {
        lower: bound.min,
        upper: bound.max,
    };
    warn!("{}", diagnostic);
    found.diagnostics.push(diagnostic);

    if y_low == 0.0 || y_high == 0.0 {
        found.roots.extend(
            [(gap.min, y_low), (gap.max, y_high)]
                .into_iter()
                .filter(|&(_, y)| y == 0.0)
                .map(|(x, _)| x),
        );
        found.roots.dedup();
    } else {
        solve_into(&mut found, curve, gap, config);
    }
    found
}

/// Locate the single root bracketed by `interval`, recording it in `found`,
/// or a [`Diagnostic::NonConvergence`] when the budget runs out.
fn solve_into(found: &mut RootList, curve: &Curve, interval: Interval, config: &IsolationConfig) {
    match locate(curve, interval, config) {
        Ok(estimate) if estimate.converged => found.roots.push(estimate.x),
        Ok(estimate) => {
            let diagnostic = Diagnostic::NonConvergence {
                order: 0,
                estimate: estimate.x,
                residual: estimate.residual,
                iterations: estimate.iterations,
            };
            warn!("{}", diagnostic);
            found.diagnostics.push(diagnostic);
        }
        Err(err) => warn!(error = %err, "root search rejected a bracketed interval"),
    }
}

/// Lowest order in `1..=max_order` whose derivative has a dominant extreme
/// term over `range`.
///
/// The highest-exponent term only gains on every other term as `x` grows,
/// so dominance at `range.min` holds for the whole range. Likewise for the
/// lowest-exponent term at `range.max`.
fn dominant_order(curve: &Curve, range: Interval, max_order: u32) -> Option<u32> {
    let terms = curve.terms();
    let last = terms.len().checked_sub(1)?;

    (1..=max_order).find(|&order| {
        let derived: Vec<Term> = terms.iter().map(|t| t.derivative(order)).collect();
        dominates(&derived, last, range.min) || dominates(&derived, 0, range.max)
    })
}

/// `true` when `|terms[lead](x)|` exceeds the combined opposite-signed terms.
fn dominates(terms: &[Term], lead: usize, x: f64) -> bool {
    let anchor = terms[lead];
    let opposing: f64 = terms
        .iter()
        .enumerate()
        .filter(|&(i, t)| i != lead && t.coefficient * anchor.coefficient <= 0.0)
        .map(|(_, t)| t.evaluate(x))
        .sum();
    anchor.evaluate(x).abs() > opposing.abs()
}

fn locate(
    curve: &Curve,
    interval: Interval,
    config: &IsolationConfig,
) -> Result<RootEstimate<f64>, SolverError> {
    let solver_config = config.solver_config();
    let f = |x: f64| curve.evaluate(x);
    match config.method {
        RootMethod::Brent => BrentSolver::find_root(f, interval.min, interval.max, &solver_config),
        RootMethod::Bisection => {
            bisection::find_root(f, interval.min, interval.max, &solver_config)
        }
    }
}
