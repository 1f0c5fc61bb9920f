//! Finite sum of exponential terms.

use super::Term;
use crate::types::CurveError;
use std::fmt;

/// A curve `f(x) = Σ A_i * exp(B_i * x)` with pairwise distinct exponents.
///
/// Terms keep the order they were submitted in. Operations that need the
/// canonical ascending-exponent order build a sorted copy with
/// [`Curve::sorted`]; a curve is never mutated after construction.
///
/// An empty curve is valid and is identically zero. It is what the first
/// derivative of a constant looks like.
///
/// # Example
///
/// ```
/// use expsum_core::curve::{Curve, Term};
///
/// // exp(x) - 14
/// let curve = Curve::new(vec![Term::new(1.0, 1.0), Term::new(-14.0, 0.0)]).unwrap();
/// assert!((curve.evaluate(14.0_f64.ln())).abs() < 1e-12);
///
/// // d/dx drops the constant
/// assert_eq!(curve.derivative(1).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Term>", into = "Vec<Term>")
)]
pub struct Curve {
    terms: Vec<Term>,
}

impl Curve {
    /// Construct a curve from its terms.
    ///
    /// # Errors
    ///
    /// * `CurveError::NonFiniteTerm` - a coefficient or exponent is NaN or infinite
    /// * `CurveError::DuplicateExponent` - two terms share an exponent
    pub fn new(terms: impl Into<Vec<Term>>) -> Result<Self, CurveError> {
        let terms = terms.into();

        if let Some(index) = terms.iter().position(|t| !t.is_finite()) {
            return Err(CurveError::NonFiniteTerm { index });
        }

        let mut exponents: Vec<f64> = terms.iter().map(|t| t.exponent).collect();
        exponents.sort_by(f64::total_cmp);
        if let Some(pair) = exponents.windows(2).find(|w| w[0] == w[1]) {
            return Err(CurveError::DuplicateExponent { exponent: pair[0] });
        }

        Ok(Self { terms })
    }

    /// The terms in submission order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// `true` when the curve has no terms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate `Σ A_i * exp(B_i * x)`.
    ///
    /// May overflow to ±infinity for extreme `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }

    /// Term-wise derivative of the given order.
    ///
    /// Order 0 is a structural copy of the curve. For order ≥ 1 every term
    /// with a zero exponent is dropped and each remaining coefficient is
    /// multiplied by `B^order`. Exponents are unchanged, so the result stays
    /// a valid curve; coefficients can overflow for very large rates or
    /// orders.
    pub fn derivative(&self, order: u32) -> Curve {
        if order == 0 {
            return self.clone();
        }
        Curve {
            terms: self
                .terms
                .iter()
                .filter(|t| t.exponent != 0.0)
                .map(|t| t.derivative(order))
                .collect(),
        }
    }

    /// Copy of the curve ordered by ascending exponent.
    pub fn sorted(&self) -> Curve {
        let mut terms = self.terms.clone();
        terms.sort_by(|a, b| a.exponent.total_cmp(&b.exponent));
        Curve { terms }
    }

    /// Sorted copy without zero-coefficient terms, which never affect the sum.
    pub(crate) fn normalized(&self) -> Curve {
        let mut sorted = self.sorted();
        sorted.terms.retain(|t| t.coefficient != 0.0);
        sorted
    }

    /// `true` when at least one coefficient is positive and one is negative.
    ///
    /// Without a sign change every term, and hence the sum, keeps one sign
    /// everywhere.
    pub fn has_sign_change(&self) -> bool {
        let positive = self.terms.iter().any(|t| t.coefficient > 0.0);
        let negative = self.terms.iter().any(|t| t.coefficient < 0.0);
        positive && negative
    }

    /// Term with the lowest exponent.
    pub fn lowest(&self) -> Option<&Term> {
        self.terms
            .iter()
            .min_by(|a, b| a.exponent.total_cmp(&b.exponent))
    }

    /// Term with the highest exponent.
    pub fn highest(&self) -> Option<&Term> {
        self.terms
            .iter()
            .max_by(|a, b| a.exponent.total_cmp(&b.exponent))
    }
}

impl TryFrom<Vec<Term>> for Curve {
    type Error = CurveError;

    fn try_from(terms: Vec<Term>) -> Result<Self, Self::Error> {
        Curve::new(terms)
    }
}

impl From<Curve> for Vec<Term> {
    fn from(curve: Curve) -> Self {
        curve.terms
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            let magnitude = term.coefficient.abs();
            match (i, term.coefficient < 0.0) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            if term.exponent == 0.0 {
                write!(f, "{}", magnitude)?;
            } else {
                write!(f, "{}*exp({}*x)", magnitude, term.exponent)?;
            }
        }
        Ok(())
    }
}
