//! Single exponential component `A * exp(B * x)`.

/// One exponential term of a curve.
///
/// # Example
///
/// ```
/// use expsum_core::curve::Term;
///
/// let term = Term::new(2.0, 0.5);
/// assert!((term.evaluate(2.0) - 2.0 * 1.0_f64.exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    /// Coefficient `A`.
    pub coefficient: f64,
    /// Growth (positive) or decay (negative) rate `B`.
    pub exponent: f64,
}

impl Term {
    /// Construct a term `coefficient * exp(exponent * x)`.
    #[inline]
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Value of the term at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * (self.exponent * x).exp()
    }

    /// The `order`-th derivative of this term, `A * B^order * exp(B * x)`.
    ///
    /// Order 0 returns the term unchanged, so that a constant term
    /// (`B = 0`) keeps its coefficient.
    #[inline]
    pub fn derivative(&self, order: u32) -> Self {
        if order == 0 {
            return *self;
        }
        Self {
            coefficient: self.coefficient * self.exponent.powi(order as i32),
            exponent: self.exponent,
        }
    }

    /// `true` when both fields are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coefficient.is_finite() && self.exponent.is_finite()
    }

    /// `true` when the coefficients of `self` and `other` are of strictly
    /// opposite sign. Zero coefficients oppose nothing.
    #[inline]
    pub fn opposes(&self, other: &Term) -> bool {
        self.coefficient * other.coefficient < 0.0
    }
}

impl From<(f64, f64)> for Term {
    fn from((coefficient, exponent): (f64, f64)) -> Self {
        Self::new(coefficient, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_constant_term() {
        let term = Term::new(-14.0, 0.0);
        assert_eq!(term.evaluate(123.0), -14.0);
    }

    #[test]
    fn test_derivative_order_zero_keeps_constant() {
        let term = Term::new(-14.0, 0.0);
        assert_eq!(term.derivative(0), term);
    }

    #[test]
    fn test_derivative_scales_by_power_of_rate() {
        let term = Term::new(5.0, -1.0 / 1.5);
        let d3 = term.derivative(3);
        assert_relative_eq!(d3.coefficient, 5.0 * (-1.0_f64 / 1.5).powi(3), epsilon = 1e-15);
        assert_eq!(d3.exponent, term.exponent);
    }

    #[test]
    fn test_opposes() {
        let pos = Term::new(1.0, 0.0);
        let neg = Term::new(-1.0, 1.0);
        let zero = Term::new(0.0, 2.0);
        assert!(pos.opposes(&neg));
        assert!(neg.opposes(&pos));
        assert!(!pos.opposes(&pos));
        assert!(!zero.opposes(&neg));
    }

    #[test]
    fn test_from_tuple() {
        let term: Term = (0.01, 0.2).into();
        assert_eq!(term, Term::new(0.01, 0.2));
    }
}
