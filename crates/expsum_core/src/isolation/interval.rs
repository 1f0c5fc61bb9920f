//! Closed intervals on the real line.

/// Closed interval `[min, max]`.
///
/// Candidate intervals of the cascade always satisfy `min <= max`. An
/// interval with `max < min` is empty; [`bound_range`](super::bound_range)
/// returns one when its two analytic bounds cross, meaning no root exists.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower end.
    pub min: f64,
    /// Upper end.
    pub max: f64,
}

impl Interval {
    /// Construct `[min, max]` as given; no reordering is done.
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The whole real line.
    #[inline]
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// `max - min`; negative for an empty interval.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.min + 0.5 * (self.max - self.min)
    }

    /// `true` when `max < min`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// `true` when both ends are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// `true` when `min <= x <= max`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Intersection of two intervals; empty when they do not overlap.
    #[inline]
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_overlapping() {
        let a = Interval::new(0.0, 100.0);
        let b = Interval::new(-3.0, 46.5);
        assert_eq!(a.intersect(&b), Interval::new(0.0, 46.5));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(2.0, 3.0);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_unbounded_is_identity_for_intersect() {
        let a = Interval::new(-2.0, 5.0);
        assert_eq!(a.intersect(&Interval::unbounded()), a);
        assert!(!Interval::unbounded().is_finite());
    }

    #[test]
    fn test_point_interval() {
        let p = Interval::new(1.5, 1.5);
        assert!(!p.is_empty());
        assert_eq!(p.width(), 0.0);
        assert_eq!(p.midpoint(), 1.5);
        assert!(p.contains(1.5));
    }
}
