//! Bracketed root-finding solvers.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Resumable Brent's method with a bisection warm-up.
//!   The caller evaluates the function; the solver only proposes points.
//! - [`bisection::find_root`]: Plain bisection, kept as an alternate strategy
//!
//! Both report an exhausted iteration budget as a non-converged
//! [`RootEstimate`] rather than an error.
//!
//! ## Configuration
//!
//! [`SolverConfig`] carries:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-12)
//! - `max_iterations`: Maximum trial points per search (default: 30)
//!
//! ## Examples
//!
//! ```
//! use expsum_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! let estimate = BrentSolver::find_root(
//!     |x: f64| x.exp() - 14.0,
//!     0.0,
//!     4.0,
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//! assert!(estimate.converged);
//! assert!((estimate.x - 14.0_f64.ln()).abs() < 1e-9);
//! ```

pub mod bisection;
mod brent;
mod config;
mod estimate;

// Re-export public types at module level
pub use brent::{BrentSolver, Phase};
pub use config::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use estimate::RootEstimate;
