//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from the bracketed root-finding solvers
//! - `CurveError`: Errors from exponential-sum curve construction
//! - `IsolationError`: Errors from the multi-root isolation cascade
//!
//! Soft failures of the isolation cascade (non-convergence, degenerate
//! bounds) are not errors; they are reported as
//! [`Diagnostic`](crate::isolation::Diagnostic) values next to the roots.

use crate::math::solvers::Phase;
use thiserror::Error;

/// Root-finding solver errors.
///
/// # Variants
/// - `NoBracket`: Function values at bracket endpoints do not change sign
/// - `ProtocolViolation`: A resumable solver step was called out of order
///
/// # Examples
/// ```
/// use expsum_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: 1.0, b: 2.0 };
/// assert!(format!("{}", err).contains("No bracket"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// No valid bracket: `a > b`, or `f(a)` and `f(b)` share a sign or one is zero.
    #[error("No bracket: f({a}) and f({b}) do not change sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// A step operation was called in the wrong phase of the
    /// `next_x` / `set_next_y` exchange.
    #[error("Protocol violation: solver is {actual}, operation requires {expected}")]
    ProtocolViolation {
        /// Phase required by the operation
        expected: Phase,
        /// Phase the solver was actually in
        actual: Phase,
    },
}

/// Exponential-sum curve construction errors.
///
/// # Examples
/// ```
/// use expsum_core::types::CurveError;
///
/// let err = CurveError::DuplicateExponent { exponent: 0.5 };
/// assert!(format!("{}", err).contains("0.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveError {
    /// A coefficient or exponent is NaN or infinite.
    #[error("Term {index} has a non-finite coefficient or exponent")]
    NonFiniteTerm {
        /// Position of the offending term in the submitted order
        index: usize,
    },

    /// Two terms share the same exponent.
    #[error("Duplicate exponent {exponent}: exponents must be pairwise distinct")]
    DuplicateExponent {
        /// The repeated exponent
        exponent: f64,
    },
}

/// Multi-root isolation errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IsolationError {
    /// The requested search range has a NaN end, or stays unbounded after
    /// clipping to the analytic root bound.
    #[error("Search range [{x_min}, {x_max}] is not a finite interval")]
    NonFiniteRange {
        /// Requested lower end
        x_min: f64,
        /// Requested upper end
        x_max: f64,
    },

    /// The isolation settings cannot drive a root search.
    #[error("Invalid isolation config: {0}")]
    InvalidConfig(String),
}
