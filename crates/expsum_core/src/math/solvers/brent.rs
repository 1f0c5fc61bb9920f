//! Resumable Brent's method root-finding solver.

use super::estimate::{BestSample, RootEstimate};
use super::{SolverConfig, DEFAULT_TOLERANCE};
use crate::types::SolverError;
use num_traits::Float;
use std::fmt;

/// Which half of the `next_x` / `set_next_y` exchange the solver expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The caller must request the next trial point with `next_x`.
    AwaitingX,
    /// The caller must report `f(x)` for the last trial point with `set_next_y`.
    AwaitingY,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingX => write!(f, "awaiting x"),
            Phase::AwaitingY => write!(f, "awaiting y"),
        }
    }
}

/// Bisection warm-up: narrows the range until both sides of the root
/// have been sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Warmup<T> {
    /// Lower end; lies on the same side of the root as the setup's `x1`.
    low: T,
    high: T,
    low_y: Option<T>,
    high_y: Option<T>,
    /// Last midpoint handed out.
    sample: T,
    /// Sign of `f(x1)`; samples of the other sign become the new `high`.
    first_negative: bool,
}

impl<T: Float> Warmup<T> {
    fn midpoint(&mut self) -> T {
        self.sample = (self.low + self.high) / (T::one() + T::one());
        self.sample
    }

    /// Classifies `y` and returns the starting Brent bracket once both
    /// sides of the root are known.
    fn record(&mut self, y: T) -> Option<Bracket<T>> {
        let crosses = if self.first_negative {
            y > T::zero()
        } else {
            y < T::zero()
        };
        if crosses {
            self.high = self.sample;
            self.high_y = Some(y);
        } else {
            self.low = self.sample;
            self.low_y = Some(y);
        }

        match (self.low_y, self.high_y) {
            (Some(low_y), Some(high_y)) => {
                Some(Bracket::start(self.low, low_y, self.high, high_y))
            }
            _ => None,
        }
    }

    fn best(&self) -> T {
        match (self.low_y, self.high_y) {
            (Some(ly), Some(hy)) if ly.abs() < hy.abs() => self.low,
            (_, Some(_)) => self.high,
            (Some(_), None) => self.low,
            (None, None) => self.sample,
        }
    }
}

/// Brent working set. `b` is always the best estimate (`|fa| >= |fb|`),
/// and `a`, `b` always bracket the root.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bracket<T> {
    a: T,
    fa: T,
    b: T,
    fb: T,
    c: T,
    fc: T,
    d: T,
    /// Last trial point handed out.
    s: T,
    /// Set when the previous step was a bisection.
    m_flag: bool,
}

impl<T: Float> Bracket<T> {
    fn start(a: T, fa: T, b: T, fb: T) -> Self {
        let (a, fa, b, fb) = if fa.abs() < fb.abs() {
            (b, fb, a, fa)
        } else {
            (a, fa, b, fb)
        };
        Self {
            a,
            fa,
            b,
            fb,
            c: a,
            fc: fa,
            d: a,
            s: b,
            m_flag: true,
        }
    }

    fn next_trial(&mut self, tolerance: T) -> T {
        let Self {
            a,
            fa,
            b,
            fb,
            c,
            fc,
            d,
            ..
        } = *self;
        let two = T::one() + T::one();
        let three = two + T::one();
        let four = two + two;

        let mut s = if fa != fc && fb != fc {
            // Inverse quadratic interpolation
            a * fb * fc / ((fa - fb) * (fa - fc))
                + b * fa * fc / ((fb - fa) * (fb - fc))
                + c * fa * fb / ((fc - fa) * (fc - fb))
        } else {
            // Secant
            b - fb * (b - a) / (fb - fa)
        };

        let quarter = (three * a + b) / four;
        let outside = !((s > quarter && s < b) || (s < quarter && s > b));
        // |b - c| after a bisection step, |c - d| after an interpolation step
        let span = if self.m_flag { (b - c).abs() } else { (c - d).abs() };
        let too_far = (s - b).abs() >= span / two;
        let stalled = span < tolerance.abs();

        if outside || too_far || stalled {
            s = (a + b) / two;
            self.m_flag = true;
        } else {
            self.m_flag = false;
        }

        self.s = s;
        s
    }

    fn record(&mut self, fs: T) {
        self.d = self.c;
        self.c = self.b;
        self.fc = self.fb;

        if self.fa * fs < T::zero() {
            self.b = self.s;
            self.fb = fs;
        } else {
            self.a = self.s;
            self.fa = fs;
        }

        if self.fa.abs() < self.fb.abs() {
            std::mem::swap(&mut self.a, &mut self.b);
            std::mem::swap(&mut self.fa, &mut self.fb);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage<T> {
    Bisection(Warmup<T>),
    Brent(Bracket<T>),
}

/// Resumable Brent's method root finder.
///
/// The solver never calls the function itself. The caller drives it with a
/// strict exchange: [`next_x`](Self::next_x) hands out a trial point, the
/// caller evaluates `f` there and reports the value with
/// [`set_next_y`](Self::set_next_y), and so on until the caller is satisfied
/// with `|f(x)|` or runs out of budget. Calling either operation out of turn
/// returns [`SolverError::ProtocolViolation`] and leaves the state untouched.
///
/// The search starts with bisection on a range whose midpoint is the
/// caller's `x2`. Once a sample on each side of the root has been seen, it
/// switches to Brent's method: inverse quadratic interpolation when the
/// last three values are distinct, secant otherwise, each guarded by the
/// usual safeguard conditions with bisection as the fallback.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use expsum_core::math::solvers::BrentSolver;
///
/// let f = |x: f64| x.exp() - 14.0;
/// let mut solver = BrentSolver::setup(0.0, f(0.0), 4.0, f(4.0)).unwrap();
///
/// let mut root = f64::NAN;
/// for _ in 0..30 {
///     let x = solver.next_x().unwrap();
///     let y = f(x);
///     if y.abs() < 1e-12 {
///         root = x;
///         break;
///     }
///     solver.set_next_y(y).unwrap();
/// }
/// assert!((root - 14.0_f64.ln()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BrentSolver<T: Float> {
    stage: Stage<T>,
    phase: Phase,
    tolerance: T,
}

impl<T: Float> BrentSolver<T> {
    /// Start a search on the bracket `[x1, x2]` with known values `y1 = f(x1)`
    /// and `y2 = f(x2)`.
    ///
    /// The bisection range is `[x1, x1 + 2 (x2 - x1)]`, so its midpoint is
    /// `x2`; that first exchange is performed here with the known `y2`, and
    /// the first trial point handed to the caller is the midpoint of
    /// `[x1, x2]`.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - `x1 > x2`, or `y1 * y2` is not negative
    pub fn setup(x1: T, y1: T, x2: T, y2: T) -> Result<Self, SolverError> {
        if x1 > x2 || !(y1 * y2 < T::zero()) {
            return Err(SolverError::NoBracket {
                a: x1.to_f64().unwrap_or(f64::NAN),
                b: x2.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::one() + T::one();
        let mut solver = Self {
            stage: Stage::Bisection(Warmup {
                low: x1,
                high: x1 + two * (x2 - x1),
                low_y: None,
                high_y: None,
                sample: x1,
                first_negative: y1 < T::zero(),
            }),
            phase: Phase::AwaitingX,
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
        };

        solver.next_x()?;
        solver.set_next_y(y2)?;
        Ok(solver)
    }

    /// Re-initialise this solver for a new bracket, keeping its tolerance.
    ///
    /// # Errors
    ///
    /// Same as [`setup`](Self::setup); on error the solver is unchanged.
    pub fn reset(&mut self, x1: T, y1: T, x2: T, y2: T) -> Result<(), SolverError> {
        let mut fresh = Self::setup(x1, y1, x2, y2)?;
        fresh.tolerance = self.tolerance;
        *self = fresh;
        Ok(())
    }

    /// Override the tolerance used by the interpolation safeguards.
    pub fn set_tolerance(&mut self, tolerance: T) {
        self.tolerance = tolerance;
    }

    /// Current tolerance (default `1e-12`).
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Which operation the solver expects next.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` once the bisection warm-up is over and Brent's method is active.
    pub fn is_bracketing(&self) -> bool {
        matches!(self.stage, Stage::Brent(_))
    }

    /// Best root estimate from the values reported so far.
    pub fn best_estimate(&self) -> T {
        match &self.stage {
            Stage::Bisection(warmup) => warmup.best(),
            Stage::Brent(bracket) => bracket.b,
        }
    }

    /// Produce the next trial point.
    ///
    /// # Errors
    ///
    /// * `SolverError::ProtocolViolation` - a value for the previous trial
    ///   point has not been reported yet
    pub fn next_x(&mut self) -> Result<T, SolverError> {
        self.expect_phase(Phase::AwaitingX)?;

        let tolerance = self.tolerance;
        let x = match &mut self.stage {
            Stage::Bisection(warmup) => warmup.midpoint(),
            Stage::Brent(bracket) => bracket.next_trial(tolerance),
        };

        self.phase = Phase::AwaitingY;
        Ok(x)
    }

    /// Report `f(x)` for the trial point returned by the last `next_x`.
    ///
    /// # Errors
    ///
    /// * `SolverError::ProtocolViolation` - no trial point is outstanding
    pub fn set_next_y(&mut self, y: T) -> Result<(), SolverError> {
        self.expect_phase(Phase::AwaitingY)?;

        let promoted = match &mut self.stage {
            Stage::Bisection(warmup) => warmup.record(y),
            Stage::Brent(bracket) => {
                bracket.record(y);
                None
            }
        };
        if let Some(bracket) = promoted {
            self.stage = Stage::Brent(bracket);
        }

        self.phase = Phase::AwaitingX;
        Ok(())
    }

    /// Drive a full search for a root of `f` in `[x_min, x_max]`.
    ///
    /// Loops `next_x` / `f` / `set_next_y` until `|f(x)| < config.tolerance`
    /// or `config.max_iterations` trial points have been evaluated.
    ///
    /// # Returns
    ///
    /// * `Ok(estimate)` - `estimate.converged` tells whether the tolerance
    ///   was reached; otherwise `estimate.x` is the best point sampled
    /// * `Err(SolverError::NoBracket)` - `f(x_min)` and `f(x_max)` do not
    ///   change sign
    ///
    /// # Example
    ///
    /// ```
    /// use expsum_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let estimate =
    ///     BrentSolver::find_root(|x: f64| x * x - 2.0, 0.0, 2.0, &SolverConfig::default()).unwrap();
    /// assert!(estimate.converged);
    /// assert!((estimate.x - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn find_root<F>(
        mut f: F,
        x_min: T,
        x_max: T,
        config: &SolverConfig<T>,
    ) -> Result<RootEstimate<T>, SolverError>
    where
        F: FnMut(T) -> T,
    {
        let y_min = f(x_min);
        let y_max = f(x_max);
        let mut solver = Self::setup(x_min, y_min, x_max, y_max)?;
        solver.set_tolerance(config.tolerance);

        let mut best = BestSample::of(x_min, y_min, x_max, y_max);
        for iteration in 1..=config.max_iterations {
            let x = solver.next_x()?;
            let y = f(x);
            if y.abs() < config.tolerance {
                return Ok(RootEstimate::converged(x, y, iteration));
            }
            best.offer(x, y);
            solver.set_next_y(y)?;
        }

        Ok(RootEstimate::exhausted(best.x, best.y, config.max_iterations))
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SolverError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SolverError::ProtocolViolation {
                expected,
                actual: self.phase,
            })
        }
    }
}
