use std::cmp::Ordering;

use rootscope_core::{Function, Problem, SolverConfig};

use crate::{
    Error, Estimate, Method, Requirement, Step,
    method::{bracket, difference_ratio, evaluate, sign_of_product},
};

/// Initial value of the convergence metric, large enough to never stop a
/// run before its first step.
const INITIAL_EA: f64 = 100.0;

/// False position.
///
/// Requires a bracketing interval. Each step intersects the secant line
/// through the two bracket endpoints with the axis and replaces the endpoint
/// that shares its sign. The run stops once successive approximations differ
/// by less than `eps`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegulaFalsi;

/// False position with Illinois-style damping.
///
/// Identical to [`RegulaFalsi`] until the same endpoint has been replaced on
/// two consecutive steps; from then on the function value stored at the
/// stale endpoint is halved after each such step, which pulls the next
/// approximation toward it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifiedRegulaFalsi;

/// Per-run state shared by both false position variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegulaFalsiState {
    method: &'static str,
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
    c: f64,
    ea: f64,
    eps: f64,
    damping: Option<Damping>,
    done: bool,
}

/// Consecutive-update counters for the damped variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Damping {
    left: u32,
    right: u32,
}

impl RegulaFalsiState {
    fn new(
        method: &'static str,
        problem: &Problem,
        config: &SolverConfig,
        damping: Option<Damping>,
    ) -> Result<Self, Error> {
        let interval = problem
            .interval()
            .ok_or(Error::missing(method, Requirement::Interval))?;
        let (fa, fb) = bracket(method, problem.function(), interval)?;

        Ok(Self {
            method,
            a: interval.a(),
            b: interval.b(),
            fa,
            fb,
            c: interval.b(),
            ea: INITIAL_EA,
            eps: config.eps(),
            damping,
            done: false,
        })
    }

    /// Returns the current endpoints `(a, b)`, oriented as the interval was given.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// Returns the convergence metric, the last change in approximation.
    #[must_use]
    pub fn ea(&self) -> f64 {
        self.ea
    }
}

impl Method for RegulaFalsi {
    const NAME: &'static str = "regula falsi";
    type State = RegulaFalsiState;

    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error> {
        RegulaFalsiState::new(Self::NAME, problem, config, None)
    }
}

impl Method for ModifiedRegulaFalsi {
    const NAME: &'static str = "modified regula falsi";
    type State = RegulaFalsiState;

    fn init(&self, problem: &Problem, config: &SolverConfig) -> Result<Self::State, Error> {
        RegulaFalsiState::new(Self::NAME, problem, config, Some(Damping::default()))
    }
}

impl Step for RegulaFalsiState {
    fn step(&mut self, f: &Function) -> Result<Option<Estimate>, Error> {
        if self.done {
            return Ok(None);
        }

        let (a, b, fa, fb) = (self.a, self.b, self.fa, self.fb);
        let c_prev = self.c;
        let c = b - difference_ratio(self.method, b, fb * (a - b), fa, fb)?;
        let estimate = evaluate(self.method, f, c)?;
        let fc = estimate.fx;
        self.c = c;

        // An approximation of exactly zero keeps the previous metric.
        if c != 0.0 {
            self.ea = (c - c_prev).abs();
        }

        match sign_of_product(fa, fc) {
            Ordering::Less => {
                self.b = c;
                self.fb = fc;
                if let Some(damping) = self.damping.as_mut() {
                    damping.left = 0;
                    damping.right += 1;
                    if damping.right >= 2 {
                        self.fa /= 2.0;
                    }
                }
            }
            Ordering::Greater => {
                self.a = c;
                self.fa = fc;
                if let Some(damping) = self.damping.as_mut() {
                    damping.right = 0;
                    damping.left += 1;
                    if damping.left >= 2 {
                        self.fb /= 2.0;
                    }
                }
            }
            Ordering::Equal => self.ea = 0.0,
        }

        self.done = self.ea < self.eps;
        Ok(Some(estimate))
    }
}
