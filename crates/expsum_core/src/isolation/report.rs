//! Result types of root isolation.

use super::Interval;
use std::fmt;

/// Soft failure observed while isolating roots.
///
/// None of these abort the search; they flag that the returned list may be
/// incomplete.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// A bracketed search ran out of iterations.
    NonConvergence {
        /// Derivative order being walked (0 is the curve itself).
        order: u32,
        /// Best point found; the interval was still split there.
        estimate: f64,
        /// Derivative value at `estimate`.
        residual: f64,
        /// Trial points spent.
        iterations: usize,
    },
    /// The analytic bound collapsed to a point without a sign change.
    DegenerateBound {
        /// The collapsed point.
        x: f64,
    },
    /// The two sides of the analytic bound crossed, yet the curve changed
    /// sign between them.
    InvertedBound {
        /// Lower side of the bound.
        lower: f64,
        /// Upper side of the bound, below `lower`.
        upper: f64,
    },
    /// No derivative up to the configured order had a dominant term.
    NoDominantOrder {
        /// Highest order tried.
        max_order: u32,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NonConvergence {
                order,
                estimate,
                residual,
                iterations,
            } => write!(
                f,
                "derivative {} did not converge after {} iterations (x = {}, f = {:e})",
                order, iterations, estimate, residual
            ),
            Diagnostic::DegenerateBound { x } => {
                write!(f, "bound collapsed to {} without a sign change", x)
            }
            Diagnostic::InvertedBound { lower, upper } => write!(
                f,
                "bound inverted to [{}, {}] but the curve changes sign there",
                lower, upper
            ),
            Diagnostic::NoDominantOrder { max_order } => write!(
                f,
                "no dominant term up to derivative {}; searched the curve directly",
                max_order
            ),
        }
    }
}

/// Roots found on an interval, in ascending order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootList {
    /// Distinct roots, strictly ascending.
    pub roots: Vec<f64>,
    /// Requested range clipped to the analytic bound.
    pub searched: Interval,
    /// Lowest derivative order with constant sign over `searched`, if one
    /// was needed and found.
    pub dominant_order: Option<u32>,
    /// Soft failures encountered along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl RootList {
    pub(crate) fn empty(searched: Interval) -> Self {
        Self {
            roots: Vec::new(),
            searched,
            dominant_order: None,
            diagnostics: Vec::new(),
        }
    }

    /// Number of roots.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// `true` when no root was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// `true` when the search raised no diagnostics.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over the roots in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.roots.iter()
    }
}

impl<'a> IntoIterator for &'a RootList {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
