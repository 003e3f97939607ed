use rootscope_core::{Function, Problem, SolverConfig};

use crate::{
    Error, Estimate, Method, Requirement, Step,
    method::{difference_ratio, evaluate},
};

/// The secant method.
///
/// Requires two distinct initial guesses. Each step replaces the derivative
/// in Newton's update with the slope through the two latest approximations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Secant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantState {
    x0: f64,
    x1: f64,
    eps: f64,
    converged: bool,
}

impl Method for Secant {
    const NAME: &'static str = "secant";
    type State = SecantState;

    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error> {
        let guesses = problem
            .two_guesses()
            .ok_or(Error::missing(Self::NAME, Requirement::TwoGuesses))?;

        Ok(SecantState {
            x0: guesses.x0(),
            x1: guesses.x1(),
            eps: config.eps(),
            converged: false,
        })
    }
}

impl Step for SecantState {
    fn step(&mut self, f: &Function) -> Result<Option<Estimate>, Error> {
        if self.converged {
            return Ok(None);
        }

        let (x0, x1) = (self.x0, self.x1);
        let fx0 = evaluate(Secant::NAME, f, x0)?.fx;
        let fx1 = evaluate(Secant::NAME, f, x1)?.fx;

        let x2 = x1 - difference_ratio(Secant::NAME, x1, fx1 * (x1 - x0), fx1, fx0)?;
        let estimate = evaluate(Secant::NAME, f, x2)?;

        self.converged = (x2 - x1).abs() < self.eps;
        self.x0 = x1;
        self.x1 = x2;
        Ok(Some(estimate))
    }
}
