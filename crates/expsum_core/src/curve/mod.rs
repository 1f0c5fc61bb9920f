//! Exponential-sum curves.
//!
//! This module provides:
//! - [`Term`]: one component `A * exp(B * x)`
//! - [`Curve`]: a validated finite sum of terms with pairwise distinct
//!   exponents, its evaluator and its term-wise derivative transform
//!
//! ## Examples
//!
//! ```
//! use expsum_core::curve::{Curve, Term};
//!
//! // 5 * exp(-x / 1.5) - 2
//! let curve = Curve::new(vec![Term::new(5.0, -1.0 / 1.5), Term::new(-2.0, 0.0)]).unwrap();
//!
//! // f'(x) = -10/3 * exp(-x / 1.5)
//! let slope = curve.derivative(1);
//! assert!((slope.evaluate(0.0) + 10.0 / 3.0).abs() < 1e-12);
//! ```

mod exp_sum;
mod term;

pub use exp_sum::Curve;
pub use term::Term;
