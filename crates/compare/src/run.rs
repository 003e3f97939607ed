use rootscope_core::{Problem, Timer};
use rootscope_observers::TimeObserver;
use rootscope_solvers::{Error, RootSolver};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during a timed root-finding run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunError {
    #[error(transparent)]
    Solver(#[from] Error),

    #[error("{method} stopped before producing an approximation")]
    NoIterations { method: &'static str },
}

/// The full trajectory of a successful run.
///
/// `approximations`, `residuals`, and `times` are parallel: entry `i`
/// describes iteration `i + 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootFindingResult {
    /// The last approximation.
    pub root: f64,
    /// Number of iterations, equal to `approximations.len()`.
    pub iterations: usize,
    pub approximations: Vec<f64>,
    /// `|f(x)|` at each approximation.
    pub residuals: Vec<f64>,
    /// Seconds since the run started, non-decreasing.
    pub times: Vec<f64>,
}

/// Drives one run to completion, timing each iteration.
///
/// A [`TimeObserver`] scoped to this run records the elapsed time of every
/// iteration; the solver's registered observers are left untouched.
///
/// # Errors
///
/// Returns [`RunError::Solver`] if the solver fails at any point, and
/// [`RunError::NoIterations`] if the run ends before its first step. A
/// failed run returns no partial trajectory.
pub fn find_root(
    solver: &mut dyn RootSolver,
    problem: &Problem,
    timer: &dyn Timer,
) -> Result<RootFindingResult, RunError> {
    let method = solver.name();
    let mut time_observer = TimeObserver::start(timer);

    let mut approximations = Vec::new();
    let mut residuals = Vec::new();
    for iteration in solver.iterate_with(problem, Some(&mut time_observer))? {
        let iteration = iteration?;
        approximations.push(iteration.x);
        residuals.push(iteration.residual());
    }

    let Some(&root) = approximations.last() else {
        return Err(RunError::NoIterations { method });
    };
    let times = time_observer.into_times();

    debug!(method, root, iterations = approximations.len(), "root found");
    Ok(RootFindingResult {
        root,
        iterations: approximations.len(),
        approximations,
        residuals,
        times,
    })
}

/// Runs solvers against problems with a fixed timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootFindingService<T> {
    timer: T,
}

impl<T: Timer> RootFindingService<T> {
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    /// See [`find_root`].
    ///
    /// # Errors
    ///
    /// Fails exactly when [`find_root`] does.
    pub fn find_root(
        &self,
        solver: &mut dyn RootSolver,
        problem: &Problem,
    ) -> Result<RootFindingResult, RunError> {
        find_root(solver, problem, &self.timer)
    }
}
