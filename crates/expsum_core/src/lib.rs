//! # expsum_core: Root Isolation for Sums of Exponentials
//!
//! ## Core Layer Role
//!
//! expsum_core finds every real root of
//!
//! ```text
//! f(x) = A_1 exp(B_1 x) + A_2 exp(B_2 x) + ... + A_n exp(B_n x)
//! ```
//!
//! on a requested interval. It provides:
//! - Curve model, evaluation and derivatives (`curve`)
//! - Analytic root bound and the derivative cascade (`isolation`)
//! - Resumable Brent and bisection root finders (`math::solvers`)
//! - Error types: `SolverError`, `CurveError`, `IsolationError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! The core layer performs no I/O and depends only on:
//! - num-traits: Generic floating-point solvers
//! - thiserror: Error types
//! - tracing: Diagnostics of the cascade
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use expsum_core::curve::{Curve, Term};
//! use expsum_core::isolation::find_all_roots;
//!
//! // 5 exp(-x/1.5) - 40 exp(-x/1.3) + 1000 exp(-x/1.2) - 2 exp(0) - exp(x/10) + 0.01 exp(x/5)
//! let curve = Curve::new(vec![
//!     Term::new(5.0, -1.0 / 1.5),
//!     Term::new(-40.0, -1.0 / 1.3),
//!     Term::new(1000.0, -1.0 / 1.2),
//!     Term::new(-2.0, 0.0),
//!     Term::new(-1.0, 1.0 / 10.0),
//!     Term::new(0.01, 1.0 / 5.0),
//! ])
//! .unwrap();
//!
//! let found = find_all_roots(0.0, 100.0, &curve).unwrap();
//! assert_eq!(found.len(), 2);
//! # assert!((found.roots[0] - 6.6003595707).abs() < 1e-7);
//! # assert!((found.roots[1] - 46.2459552787).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for curves, configs and results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curve;
pub mod isolation;
pub mod math;
pub mod types;
