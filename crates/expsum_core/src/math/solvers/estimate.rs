//! Outcome of a single bracketed root search.

use num_traits::Float;

/// Result of driving a root finder to completion.
///
/// A search that exhausts its iteration budget is not an error: it yields
/// the best point sampled so far with `converged == false`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootEstimate<T: Float> {
    /// Root estimate.
    pub x: T,
    /// `f(x)` at the estimate.
    pub residual: T,
    /// Number of trial points evaluated.
    pub iterations: usize,
    /// `true` when `|residual| < tolerance`.
    pub converged: bool,
}

impl<T: Float> RootEstimate<T> {
    pub(crate) fn converged(x: T, residual: T, iterations: usize) -> Self {
        Self {
            x,
            residual,
            iterations,
            converged: true,
        }
    }

    pub(crate) fn exhausted(x: T, residual: T, iterations: usize) -> Self {
        Self {
            x,
            residual,
            iterations,
            converged: false,
        }
    }
}

/// Tracks the sample with the smallest `|f(x)|`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BestSample<T: Float> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T: Float> BestSample<T> {
    pub(crate) fn of(x1: T, y1: T, x2: T, y2: T) -> Self {
        if y1.abs() <= y2.abs() {
            Self { x: x1, y: y1 }
        } else {
            Self { x: x2, y: y2 }
        }
    }

    pub(crate) fn offer(&mut self, x: T, y: T) {
        if y.abs() < self.y.abs() {
            self.x = x;
            self.y = y;
        }
    }
}
