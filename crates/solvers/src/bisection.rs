use std::cmp::Ordering;

use rootscope_core::{Function, Problem, SolverConfig};

use crate::{
    Error, Estimate, Method, Requirement, Step,
    method::{bracket, evaluate, sign_of_product},
};

/// Interval halving.
///
/// Requires an interval whose endpoint values do not share a strict sign.
/// Each step evaluates the midpoint and keeps the half that still brackets
/// the root. The run stops once the bracket is no wider than `eps`, or right
/// after a midpoint lands exactly on a root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bisection;

/// Per-run bisection state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionState {
    a: f64,
    b: f64,
    fa: f64,
    eps: f64,
    exact: bool,
}

impl BisectionState {
    /// Returns the current bracket as `(a, b)` with `a < b`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.a, self.b)
    }
}

impl Method for Bisection {
    const NAME: &'static str = "bisection";
    type State = BisectionState;

    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error> {
        let interval = problem
            .interval()
            .ok_or(Error::missing(Self::NAME, Requirement::Interval))?;
        let (fa, fb) = bracket(Self::NAME, problem.function(), interval)?;

        let (a, b, fa) = if interval.a() < interval.b() {
            (interval.a(), interval.b(), fa)
        } else {
            (interval.b(), interval.a(), fb)
        };

        Ok(BisectionState {
            a,
            b,
            fa,
            eps: config.eps(),
            exact: false,
        })
    }
}

impl Step for BisectionState {
    fn step(&mut self, f: &Function) -> Result<Option<Estimate>, Error> {
        if self.exact || self.b - self.a <= self.eps {
            return Ok(None);
        }

        let c = 0.5 * (self.a + self.b);
        let estimate = evaluate(Bisection::NAME, f, c)?;

        match sign_of_product(self.fa, estimate.fx) {
            Ordering::Less => self.b = c,
            Ordering::Greater => {
                self.a = c;
                self.fa = estimate.fx;
            }
            Ordering::Equal => self.exact = true,
        }

        Ok(Some(estimate))
    }
}
