//! Numerical building blocks.
//!
//! - `solvers`: bracketed root finders used by the isolation cascade

pub mod solvers;
