//! Plain bisection root finder.

use super::estimate::{BestSample, RootEstimate};
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Find the root of `f` in `[x_min, x_max]` by repeated halving.
///
/// Only call this on a bracket known to hold a single root. The search
/// stops as soon as `|f(x)| < config.tolerance`; when the budget runs out the
/// best sampled point is returned with `converged == false`.
///
/// # Errors
///
/// * `SolverError::NoBracket` - `f(x_min)` and `f(x_max)` do not change sign
///
/// # Example
///
/// ```
/// use expsum_core::math::solvers::{bisection, SolverConfig};
///
/// let config = SolverConfig { tolerance: 1e-9, max_iterations: 60 };
/// let estimate = bisection::find_root(|x: f64| x * x - 2.0, 0.0, 2.0, &config).unwrap();
/// assert!(estimate.converged);
/// ```
pub fn find_root<T, F>(
    mut f: F,
    x_min: T,
    x_max: T,
    config: &SolverConfig<T>,
) -> Result<RootEstimate<T>, SolverError>
where
    T: Float,
    F: FnMut(T) -> T,
{
    let y_min = f(x_min);
    let y_max = f(x_max);
    if !(y_min * y_max < T::zero()) {
        return Err(SolverError::NoBracket {
            a: x_min.to_f64().unwrap_or(f64::NAN),
            b: x_max.to_f64().unwrap_or(f64::NAN),
        });
    }

    let two = T::one() + T::one();
    let (mut low, mut high) = (x_min, x_max);
    let mut best = BestSample::of(x_min, y_min, x_max, y_max);

    for iteration in 1..=config.max_iterations {
        let x = (low + high) / two;
        let y = f(x);
        if y.abs() < config.tolerance {
            return Ok(RootEstimate::converged(x, y, iteration));
        }
        best.offer(x, y);

        // The root cannot lie between `low` and `x` when they share a sign.
        if y_min * y > T::zero() {
            low = x;
        } else {
            high = x;
        }
    }

    Ok(RootEstimate::exhausted(best.x, best.y, config.max_iterations))
}
