//! Configuration for root isolation.

use crate::math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::types::IsolationError;
use std::fmt;
use std::str::FromStr;

/// Highest derivative order tried when searching for a dominant term.
pub const DEFAULT_MAX_DERIVATIVE_ORDER: u32 = 40;

/// Root finder used on each bracketed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RootMethod {
    /// Brent's method with a bisection warm-up.
    #[default]
    Brent,
    /// Plain bisection.
    Bisection,
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootMethod::Brent => write!(f, "brent"),
            RootMethod::Bisection => write!(f, "bisection"),
        }
    }
}

impl FromStr for RootMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brent" => Ok(RootMethod::Brent),
            "bisection" | "bisect" => Ok(RootMethod::Bisection),
            _ => Err(format!("Unknown root method: {}", s)),
        }
    }
}

/// Parameters of [`find_all_roots_with`](super::find_all_roots_with).
///
/// # Example
///
/// ```
/// use expsum_core::isolation::{IsolationConfig, RootMethod};
///
/// let config = IsolationConfig::default()
///     .with_tolerance(1e-10)
///     .with_method(RootMethod::Bisection)
///     .with_max_root_iterations(80);
/// assert_eq!(config.max_derivative_order, 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsolationConfig {
    /// A root is accepted once `|f(x)| < tolerance`; also the width below
    /// which the analytic bound counts as collapsed.
    pub tolerance: f64,
    /// Trial-point budget of each individual root search.
    pub max_root_iterations: usize,
    /// Highest derivative order tried for dominance.
    pub max_derivative_order: u32,
    /// Root finder used on bracketed intervals.
    pub method: RootMethod,
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_root_iterations: DEFAULT_MAX_ITERATIONS,
            max_derivative_order: DEFAULT_MAX_DERIVATIVE_ORDER,
            method: RootMethod::default(),
        }
    }
}

impl IsolationConfig {
    /// Set the root tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not positive.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        assert!(tolerance > 0.0, "tolerance must be positive");
        self.tolerance = tolerance;
        self
    }

    /// Set the per-search iteration budget.
    ///
    /// # Panics
    ///
    /// Panics if `max_root_iterations` is zero.
    pub fn with_max_root_iterations(mut self, max_root_iterations: usize) -> Self {
        assert!(max_root_iterations > 0, "max_root_iterations must be > 0");
        self.max_root_iterations = max_root_iterations;
        self
    }

    /// Set the highest derivative order tried for dominance.
    pub fn with_max_derivative_order(mut self, max_derivative_order: u32) -> Self {
        self.max_derivative_order = max_derivative_order;
        self
    }

    /// Select the root finder.
    pub fn with_method(mut self, method: RootMethod) -> Self {
        self.method = method;
        self
    }

    /// Check settings that may have bypassed the builder, e.g. when the
    /// struct is filled in directly or deserialised.
    ///
    /// # Errors
    ///
    /// * `IsolationError::InvalidConfig` - tolerance not positive and finite,
    ///   or `max_root_iterations` is zero
    pub fn validate(&self) -> Result<(), IsolationError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(IsolationError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_root_iterations == 0 {
            return Err(IsolationError::InvalidConfig(
                "max_root_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Solver settings for a single root search.
    ///
    /// # Panics
    ///
    /// Panics on settings that [`validate`](Self::validate) rejects.
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig::new(self.tolerance, self.max_root_iterations)
    }
}
