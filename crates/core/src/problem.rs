use thiserror::Error;

use crate::Function;

/// Errors that can occur when building a [`Problem`] or its initializing data.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    /// No interval, initial guess, or pair of initial guesses was supplied.
    #[error("problem needs an interval, one initial guess, or two initial guesses")]
    NoInitialData,

    /// Interval endpoints are equal.
    #[error("interval has zero width: a and b are both {value}")]
    ZeroWidthInterval { value: f64 },

    /// Both initial guesses are the same point.
    #[error("initial guesses are identical: x0 and x1 are both {value}")]
    IdenticalGuesses { value: f64 },

    /// An endpoint or guess is NaN or infinite.
    #[error("non-finite value: {value}")]
    NonFinite { value: f64 },

    /// The root multiplicity is not a finite positive number.
    #[error("root multiplicity must be finite and positive, got {value}")]
    InvalidMultiplicity { value: f64 },
}

fn finite(value: f64) -> Result<f64, ProblemError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProblemError::NonFinite { value })
    }
}

/// An interval `[a, b]` for bracketing methods.
///
/// Endpoints are kept in the order given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Creates an interval with finite, distinct endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is non-finite or `a == b`.
    #[allow(clippy::float_cmp)]
    pub fn new(a: f64, b: f64) -> Result<Self, ProblemError> {
        let a = finite(a)?;
        let b = finite(b)?;

        if a == b {
            return Err(ProblemError::ZeroWidthInterval { value: a });
        }

        Ok(Self { a, b })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }
}

/// A single starting point for open methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneGuess {
    x0: f64,
}

impl OneGuess {
    /// Creates a finite initial guess.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` is non-finite.
    pub fn new(x0: f64) -> Result<Self, ProblemError> {
        Ok(Self { x0: finite(x0)? })
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }
}

/// Two distinct starting points for the secant method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoGuesses {
    x0: f64,
    x1: f64,
}

impl TwoGuesses {
    /// Creates a pair of finite, distinct initial guesses.
    ///
    /// # Errors
    ///
    /// Returns an error if a guess is non-finite or `x0 == x1`.
    #[allow(clippy::float_cmp)]
    pub fn new(x0: f64, x1: f64) -> Result<Self, ProblemError> {
        let x0 = finite(x0)?;
        let x1 = finite(x1)?;

        if x0 == x1 {
            return Err(ProblemError::IdenticalGuesses { value: x0 });
        }

        Ok(Self { x0, x1 })
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }
}

/// The assumed multiplicity `m` of the sought root.
///
/// Used by the refined Newton method to restore quadratic convergence near
/// multiple roots, where `f(x) ≈ c·(x − root)^m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMultiplicity {
    m: f64,
}

impl RootMultiplicity {
    /// Creates a multiplicity hint.
    ///
    /// # Errors
    ///
    /// Returns an error unless `m` is finite and positive.
    pub fn new(m: f64) -> Result<Self, ProblemError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(ProblemError::InvalidMultiplicity { value: m });
        }
        Ok(Self { m })
    }

    #[must_use]
    pub fn m(&self) -> f64 {
        self.m
    }
}

/// A root-finding problem: a function plus the data methods start from.
///
/// A problem carries at least one of an interval, one initial guess, or two
/// initial guesses. Each method checks for the piece it needs when a run
/// starts. Problems are immutable and shared read-only across runs.
#[derive(Debug)]
pub struct Problem {
    f: Function,
    interval: Option<Interval>,
    one_guess: Option<OneGuess>,
    two_guesses: Option<TwoGuesses>,
    root_multiplicity: Option<RootMultiplicity>,
}

impl Problem {
    /// Starts building a problem for `f`.
    #[must_use]
    pub fn builder(f: Function) -> ProblemBuilder {
        ProblemBuilder {
            f,
            interval: None,
            one_guess: None,
            two_guesses: None,
            root_multiplicity: None,
        }
    }

    #[must_use]
    pub fn function(&self) -> &Function {
        &self.f
    }

    #[must_use]
    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    #[must_use]
    pub fn one_guess(&self) -> Option<OneGuess> {
        self.one_guess
    }

    #[must_use]
    pub fn two_guesses(&self) -> Option<TwoGuesses> {
        self.two_guesses
    }

    #[must_use]
    pub fn root_multiplicity(&self) -> Option<RootMultiplicity> {
        self.root_multiplicity
    }
}

/// Builder for [`Problem`].
#[derive(Debug)]
pub struct ProblemBuilder {
    f: Function,
    interval: Option<Interval>,
    one_guess: Option<OneGuess>,
    two_guesses: Option<TwoGuesses>,
    root_multiplicity: Option<RootMultiplicity>,
}

impl ProblemBuilder {
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn one_guess(mut self, guess: OneGuess) -> Self {
        self.one_guess = Some(guess);
        self
    }

    #[must_use]
    pub fn two_guesses(mut self, guesses: TwoGuesses) -> Self {
        self.two_guesses = Some(guesses);
        self
    }

    #[must_use]
    pub fn root_multiplicity(mut self, multiplicity: RootMultiplicity) -> Self {
        self.root_multiplicity = Some(multiplicity);
        self
    }

    /// Finishes the problem.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::NoInitialData`] if no interval, one guess, or
    /// two guesses were supplied. A multiplicity alone is not enough.
    pub fn build(self) -> Result<Problem, ProblemError> {
        if self.interval.is_none() && self.one_guess.is_none() && self.two_guesses.is_none() {
            return Err(ProblemError::NoInitialData);
        }

        Ok(Problem {
            f: self.f,
            interval: self.interval,
            one_guess: self.one_guess,
            two_guesses: self.two_guesses,
            root_multiplicity: self.root_multiplicity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn square_minus_two() -> Function {
        Function::new("x^2 - 2", |x| x * x - 2.0)
    }

    #[test]
    fn interval_keeps_endpoint_order() {
        let interval = Interval::new(2.0, -1.0).expect("valid interval");
        assert_relative_eq!(interval.a(), 2.0);
        assert_relative_eq!(interval.b(), -1.0);
    }

    #[test]
    fn interval_rejects_zero_width() {
        assert_eq!(
            Interval::new(1.5, 1.5),
            Err(ProblemError::ZeroWidthInterval { value: 1.5 })
        );
    }

    #[test]
    fn interval_rejects_non_finite() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(ProblemError::NonFinite { .. })
        ));
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(ProblemError::NonFinite { .. })
        ));
    }

    #[test]
    fn guesses_reject_identical_points() {
        assert_eq!(
            TwoGuesses::new(3.0, 3.0),
            Err(ProblemError::IdenticalGuesses { value: 3.0 })
        );
        assert!(TwoGuesses::new(3.0, 3.5).is_ok());
    }

    #[test]
    fn one_guess_rejects_non_finite() {
        assert!(matches!(
            OneGuess::new(f64::NEG_INFINITY),
            Err(ProblemError::NonFinite { .. })
        ));
    }

    #[test]
    fn multiplicity_must_be_positive() {
        assert!(RootMultiplicity::new(2.0).is_ok());
        assert!(matches!(
            RootMultiplicity::new(0.0),
            Err(ProblemError::InvalidMultiplicity { .. })
        ));
        assert!(matches!(
            RootMultiplicity::new(f64::NAN),
            Err(ProblemError::InvalidMultiplicity { .. })
        ));
    }

    #[test]
    fn problem_requires_initial_data() {
        let err = Problem::builder(square_minus_two()).build();
        assert!(matches!(err, Err(ProblemError::NoInitialData)));

        let multiplicity_only = Problem::builder(square_minus_two())
            .root_multiplicity(RootMultiplicity::new(2.0).expect("valid"))
            .build();
        assert!(matches!(multiplicity_only, Err(ProblemError::NoInitialData)));
    }

    #[test]
    fn problem_keeps_supplied_data() {
        let problem = Problem::builder(square_minus_two())
            .interval(Interval::new(0.0, 2.0).expect("valid"))
            .one_guess(OneGuess::new(1.0).expect("valid"))
            .build()
            .expect("valid problem");

        assert_eq!(problem.function().name(), "x^2 - 2");
        assert!(problem.interval().is_some());
        assert!(problem.one_guess().is_some());
        assert!(problem.two_guesses().is_none());
        assert!(problem.root_multiplicity().is_none());
    }
}
