//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for solver, curve, and isolation operations
//!
//! # Re-exports
//!
//! For convenience, [`SolverError`], [`CurveError`] and [`IsolationError`]
//! are re-exported at this module level.

pub mod error;

// Re-export commonly used types at module level
pub use error::{CurveError, IsolationError, SolverError};
