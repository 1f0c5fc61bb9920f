//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod bound;
pub mod eval;
pub mod solve;
