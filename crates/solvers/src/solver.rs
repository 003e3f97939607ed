use std::fmt;

use rootscope_core::{Iteration, Observer, Problem, SolverConfig};

use crate::{Error, Iterations, Method};

/// The uniform iteration contract every method is driven through.
///
/// A solver owns its config and an ordered list of registered observers.
/// Each call to [`iterate`](RootSolver::iterate) starts a fresh, independent
/// run; nothing carries over from earlier runs.
pub trait RootSolver {
    /// Returns the method label, e.g. `"bisection"`.
    fn name(&self) -> &'static str;

    /// Returns the config used by every run.
    fn config(&self) -> &SolverConfig;

    /// Registers an observer notified on every iteration of every later run.
    ///
    /// Observers are notified in registration order. The run borrows the
    /// solver mutably, so registration cannot happen while a run is active.
    fn add_observer(&mut self, observer: Box<dyn Observer<Iteration>>);

    /// Starts a run with one extra observer scoped to this run only.
    ///
    /// The scoped observer is notified after the registered ones and is
    /// released when the returned sequence is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error before the first iteration if the problem lacks the
    /// data this method needs or the data is invalid for it.
    fn iterate_with<'a>(
        &'a mut self,
        problem: &'a Problem,
        observer: Option<&'a mut dyn Observer<Iteration>>,
    ) -> Result<Iterations<'a>, Error>;

    /// Starts a run notifying only the registered observers.
    ///
    /// # Errors
    ///
    /// See [`iterate_with`](RootSolver::iterate_with).
    fn iterate<'a>(&'a mut self, problem: &'a Problem) -> Result<Iterations<'a>, Error> {
        self.iterate_with(problem, None)
    }
}

/// Drives a [`Method`] through the [`RootSolver`] contract.
pub struct Solver<M> {
    method: M,
    config: SolverConfig,
    observers: Vec<Box<dyn Observer<Iteration>>>,
}

impl<M: Method> Solver<M> {
    /// Creates a solver with no registered observers.
    pub fn new(method: M, config: SolverConfig) -> Self {
        Self {
            method,
            config,
            observers: Vec::new(),
        }
    }

    /// Registers an observer, builder style.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Observer<Iteration> + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Returns the method.
    pub fn method(&self) -> &M {
        &self.method
    }
}

impl<M: Method> RootSolver for Solver<M> {
    fn name(&self) -> &'static str {
        M::NAME
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn add_observer(&mut self, observer: Box<dyn Observer<Iteration>>) {
        self.observers.push(observer);
    }

    fn iterate_with<'a>(
        &'a mut self,
        problem: &'a Problem,
        observer: Option<&'a mut dyn Observer<Iteration>>,
    ) -> Result<Iterations<'a>, Error> {
        let state = self.method.init(problem, &self.config)?;
        Ok(Iterations::new(
            M::NAME,
            problem.function(),
            Box::new(state),
            self.config,
            &mut self.observers,
            observer,
        ))
    }
}

impl<M: fmt::Debug> fmt::Debug for Solver<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("method", &self.method)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}
