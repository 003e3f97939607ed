use rootscope_core::{Function, Problem, SolverConfig};

use crate::{
    Error, Estimate, Instability, Method, Requirement, Step,
    method::{evaluate, step_ratio},
};

/// Newton's method.
///
/// Requires one initial guess and a function with an analytic derivative.
/// Each step follows the tangent line to the axis. The first step is always
/// produced; the run stops once consecutive approximations differ by less
/// than `eps`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Newton;

/// Newton's method scaled by a known root multiplicity.
///
/// Multiplying the tangent step by the multiplicity `m` restores quadratic
/// convergence at roots of order `m`. With `m = 1` every iterate matches
/// plain [`Newton`] exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefinedNewton;

/// Per-run state for both Newton variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonState {
    method: &'static str,
    x0: f64,
    m: f64,
    eps: f64,
    converged: bool,
}

impl NewtonState {
    fn new(
        method: &'static str,
        problem: &Problem,
        config: &SolverConfig,
        m: f64,
    ) -> Result<Self, Error> {
        let guess = problem
            .one_guess()
            .ok_or(Error::missing(method, Requirement::OneGuess))?;

        Ok(Self {
            method,
            x0: guess.x0(),
            m,
            eps: config.eps(),
            converged: false,
        })
    }
}

impl Method for Newton {
    const NAME: &'static str = "newton";
    type State = NewtonState;

    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error> {
        NewtonState::new(Self::NAME, problem, config, 1.0)
    }
}

impl Method for RefinedNewton {
    const NAME: &'static str = "refined newton";
    type State = NewtonState;

    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error> {
        let multiplicity = problem
            .root_multiplicity()
            .ok_or(Error::missing(Self::NAME, Requirement::RootMultiplicity))?;
        NewtonState::new(Self::NAME, problem, config, multiplicity.m())
    }
}

impl Step for NewtonState {
    fn step(&mut self, f: &Function) -> Result<Option<Estimate>, Error> {
        if self.converged {
            return Ok(None);
        }

        let x0 = self.x0;
        let dfx0 = f.derivative(x0)?;
        if !dfx0.is_finite() {
            return Err(Error::unstable(self.method, x0, Instability::NonFinite));
        }
        let fx0 = evaluate(self.method, f, x0)?.fx;

        let x1 = x0 - step_ratio(self.method, x0, self.m * fx0, dfx0)?;
        let estimate = evaluate(self.method, f, x1)?;

        self.converged = (x0 - x1).abs() < self.eps;
        self.x0 = x1;
        Ok(Some(estimate))
    }
}
