//! Isolation of every real root of an exponential sum.
//!
//! This module provides:
//! - [`bound_range`]: analytic interval that contains all roots
//! - [`find_all_roots`] / [`find_all_roots_with`]: the derivative cascade
//! - [`IsolationConfig`] and [`RootMethod`]: tolerance, budgets and root finder
//! - [`RootList`] and [`Diagnostic`]: results and soft failures
//!
//! ## Approach
//!
//! A sum of `n` exponentials has at most `n - 1` real roots, but they can
//! sit arbitrarily close together. Differentiating enough times makes one
//! extreme term dominate, so that derivative has a fixed sign. Its
//! antiderivative is then monotonic and has at most one root, which splits
//! the range into monotonic pieces for the next order down. Repeating to
//! order 0 brackets every root of the curve individually.
//!
//! ## Example
//!
//! ```
//! use expsum_core::curve::{Curve, Term};
//! use expsum_core::isolation::{find_all_roots_with, IsolationConfig};
//!
//! let curve = Curve::new(vec![
//!     Term::new(5.0, -1.0 / 1.5),
//!     Term::new(-40.0, -1.0 / 1.3),
//!     Term::new(2.0, 0.0),
//! ])
//! .unwrap();
//!
//! let found = find_all_roots_with(0.0, 100.0, &curve, &IsolationConfig::default()).unwrap();
//! assert_eq!(found.len(), 1);
//! assert!((found.roots[0] - 3.6341457551).abs() < 1e-8);
//! ```

mod bound;
mod cascade;
mod config;
mod interval;
mod report;

pub use bound::bound_range;
pub use cascade::{find_all_roots, find_all_roots_with};
pub use config::{IsolationConfig, RootMethod, DEFAULT_MAX_DERIVATIVE_ORDER};
pub use interval::Interval;
pub use report::{Diagnostic, RootList};
