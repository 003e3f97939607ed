use std::cmp::Ordering;

use rootscope_core::{Function, Interval, Problem, SolverConfig};

use crate::{Error, Instability};

/// A root-finding method: validates its inputs and creates per-run state.
///
/// Implementors are usually unit structs. All per-run data lives in
/// [`Method::State`], so every run starts from scratch.
pub trait Method {
    /// Label used in logs, errors, and comparisons.
    const NAME: &'static str;

    /// State carried between steps of a single run.
    type State: Step + 'static;

    /// Checks the problem for the data this method needs and builds the
    /// initial state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingProblemData`] when required data is absent,
    /// or a method-specific error (e.g. [`Error::InvalidBracket`]).
    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error>;
}

/// One state machine step.
pub trait Step {
    /// Computes the next approximation, or returns `None` once the method's
    /// stopping rule has fired.
    ///
    /// # Errors
    ///
    /// Returns an error if the step cannot be computed.
    fn step(&mut self, f: &Function) -> Result<Option<Estimate>, Error>;
}

/// An approximation and the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub x: f64,
    pub fx: f64,
}

/// Evaluates `f` at `x`, rejecting non-finite inputs and outputs.
pub(crate) fn evaluate(method: &'static str, f: &Function, x: f64) -> Result<Estimate, Error> {
    if !x.is_finite() {
        return Err(Error::unstable(method, x, Instability::NonFinite));
    }
    let fx = f.call(x);
    if !fx.is_finite() {
        return Err(Error::unstable(method, x, Instability::NonFinite));
    }
    Ok(Estimate { x, fx })
}

/// Computes an update step `numerator / denominator` taken from `at`.
///
/// A zero numerator means `at` is already an exact root, so the step is zero
/// whatever the denominator.
pub(crate) fn step_ratio(
    method: &'static str,
    at: f64,
    numerator: f64,
    denominator: f64,
) -> Result<f64, Error> {
    if numerator == 0.0 {
        return Ok(0.0);
    }
    if denominator == 0.0 {
        return Err(Error::unstable(method, at, Instability::ZeroDenominator));
    }
    Ok(numerator / denominator)
}

/// Computes `numerator / (u - v)` for a difference-quotient update.
///
/// A nearly parallel secant line is unstable: the difference counts as
/// vanished once `|u - v|` is at most `sqrt(EPSILON)` times the larger of
/// `|u|` and `|v|`.
pub(crate) fn difference_ratio(
    method: &'static str,
    at: f64,
    numerator: f64,
    u: f64,
    v: f64,
) -> Result<f64, Error> {
    let denominator = u - v;
    if numerator != 0.0 && denominator.abs() <= f64::EPSILON.sqrt() * u.abs().max(v.abs()) {
        return Err(Error::unstable(method, at, Instability::ZeroDenominator));
    }
    step_ratio(method, at, numerator, denominator)
}

/// Sign of `u·v` without forming the product, so tiny values cannot
/// underflow to zero. Both values must be finite.
pub(crate) fn sign_of_product(u: f64, v: f64) -> Ordering {
    if u == 0.0 || v == 0.0 {
        Ordering::Equal
    } else if u.is_sign_negative() == v.is_sign_negative() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Evaluates both interval endpoints and checks they bracket a root.
///
/// Returns `(fa, fb)`.
pub(crate) fn bracket(
    method: &'static str,
    f: &Function,
    interval: Interval,
) -> Result<(f64, f64), Error> {
    let (a, b) = (interval.a(), interval.b());
    let fa = evaluate(method, f, a)?.fx;
    let fb = evaluate(method, f, b)?.fx;

    if sign_of_product(fa, fb) == Ordering::Greater {
        return Err(Error::InvalidBracket { a, b, fa, fb });
    }
    Ok((fa, fb))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sign_of_product_survives_underflow() {
        assert_eq!(sign_of_product(1e-200, 1e-200), Ordering::Greater);
        assert_eq!(sign_of_product(-1e-200, 1e-200), Ordering::Less);
        assert_eq!(sign_of_product(0.0, -3.0), Ordering::Equal);
        assert_eq!(sign_of_product(-0.0, 3.0), Ordering::Equal);
    }

    #[test]
    fn step_ratio_rejects_zero_denominator() {
        assert!(matches!(
            step_ratio("m", 1.0, 2.0, 0.0),
            Err(Error::NumericalInstability {
                reason: Instability::ZeroDenominator,
                ..
            })
        ));
        assert_relative_eq!(step_ratio("m", 1.0, 0.0, 0.0).expect("exact root"), 0.0);
        assert_relative_eq!(step_ratio("m", 1.0, 3.0, 2.0).expect("ratio"), 1.5);
    }

    #[test]
    fn difference_ratio_rejects_nearly_equal_values() {
        assert!(matches!(
            difference_ratio("m", 1.0, 1.0, -1.0 + 1e-12, -1.0),
            Err(Error::NumericalInstability {
                reason: Instability::ZeroDenominator,
                ..
            })
        ));
        assert!(difference_ratio("m", 1.0, 1.0, -0.5, -1.0).is_ok());
        assert!(difference_ratio("m", 1.0, 1.0, 0.0, 0.0).is_err());
        assert_relative_eq!(
            difference_ratio("m", 1.0, 0.0, 2.0, 2.0).expect("exact root"),
            0.0
        );
    }

    #[test]
    fn evaluate_rejects_non_finite_values() {
        let f = Function::new("reciprocal", |x| 1.0 / x);

        assert!(evaluate("m", &f, 2.0).is_ok());
        assert!(matches!(
            evaluate("m", &f, 0.0),
            Err(Error::NumericalInstability {
                reason: Instability::NonFinite,
                ..
            })
        ));
        assert!(evaluate("m", &f, f64::NAN).is_err());
    }

    #[test]
    fn bracket_requires_sign_change() {
        let f = Function::new("x^2 - 2", |x| x * x - 2.0);

        let ok = bracket("m", &f, Interval::new(0.0, 2.0).expect("valid"));
        assert!(ok.is_ok());

        let err = bracket("m", &f, Interval::new(2.0, 3.0).expect("valid"));
        assert!(matches!(err, Err(Error::InvalidBracket { .. })));

        // A root exactly at an endpoint counts as bracketed.
        let f = Function::new("x - 1", |x| x - 1.0);
        assert!(bracket("m", &f, Interval::new(1.0, 3.0).expect("valid")).is_ok());
    }
}
