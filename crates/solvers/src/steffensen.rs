use rootscope_core::{Function, Problem, SolverConfig};

use crate::{
    Error, Estimate, Method, Requirement, Step,
    method::{difference_ratio, evaluate},
};

/// Steffensen's method.
///
/// Requires one initial guess. Derivative-free yet quadratically convergent:
/// the slope is estimated from `f` at the auxiliary point `x + f(x)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steffensen;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteffensenState {
    x0: f64,
    eps: f64,
    converged: bool,
}

impl Method for Steffensen {
    const NAME: &'static str = "steffensen";
    type State = SteffensenState;

    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error> {
        let guess = problem
            .one_guess()
            .ok_or(Error::missing(Self::NAME, Requirement::OneGuess))?;

        Ok(SteffensenState {
            x0: guess.x0(),
            eps: config.eps(),
            converged: false,
        })
    }
}

impl Step for SteffensenState {
    fn step(&mut self, f: &Function) -> Result<Option<Estimate>, Error> {
        if self.converged {
            return Ok(None);
        }

        let x0 = self.x0;
        let fx0 = evaluate(Steffensen::NAME, f, x0)?.fx;
        let shifted = evaluate(Steffensen::NAME, f, x0 + fx0)?.fx;

        let x1 = x0 - difference_ratio(Steffensen::NAME, x0, fx0 * fx0, shifted, fx0)?;
        let estimate = evaluate(Steffensen::NAME, f, x1)?;

        self.converged = (x0 - x1).abs() < self.eps;
        self.x0 = x1;
        Ok(Some(estimate))
    }
}
