//! Solver configuration types.

use num_traits::Float;

/// Default convergence tolerance on `|f(x)|`.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default iteration budget for a single root search.
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

/// Configuration for root-finding algorithms.
///
/// Provides common settings shared across all solver implementations,
/// including convergence tolerance and iteration limits.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use expsum_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-12);
/// assert_eq!(config.max_iterations, 30);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-9,
///     max_iterations: 100,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The search stops when `|f(x)| < tolerance`. Brent's method also uses
    /// it in its interpolation safeguards.
    pub tolerance: T,

    /// Maximum number of trial points before giving up.
    ///
    /// When the budget is exhausted the solver reports a non-converged
    /// estimate instead of an error.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-12
    /// - `max_iterations`: 30
    fn default() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use expsum_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-10, 60);
    /// assert_eq!(config.max_iterations, 60);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }
}
