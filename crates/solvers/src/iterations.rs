use std::iter::FusedIterator;

use rootscope_core::{Function, Iteration, Observer, SolverConfig};
use tracing::{debug, trace};

use crate::{Error, Step};

/// The lazy sequence of iterations produced by one run.
///
/// Each call to `next` computes one step on demand. Before an [`Iteration`]
/// is returned it is broadcast to the registered observers (in registration
/// order) and then to the run-scoped observer, so an observer such as a
/// timer sees each step before the caller can act on it.
///
/// The sequence ends when the method's stopping rule fires or the iteration
/// cap is reached. An error is yielded at most once and ends the sequence.
/// Runs are not restartable; start a new one with
/// [`RootSolver::iterate`](crate::RootSolver::iterate).
pub struct Iterations<'a> {
    method: &'static str,
    function: &'a Function,
    state: Box<dyn Step>,
    config: SolverConfig,
    observers: &'a mut [Box<dyn Observer<Iteration>>],
    scoped: Option<&'a mut dyn Observer<Iteration>>,
    completed: usize,
    finished: bool,
}

impl<'a> Iterations<'a> {
    pub(crate) fn new(
        method: &'static str,
        function: &'a Function,
        state: Box<dyn Step>,
        config: SolverConfig,
        observers: &'a mut [Box<dyn Observer<Iteration>>],
        scoped: Option<&'a mut dyn Observer<Iteration>>,
    ) -> Self {
        debug!(
            method,
            function = function.name(),
            eps = config.eps(),
            max_iterations = ?config.max_iterations(),
            "run started"
        );
        Self {
            method,
            function,
            state,
            config,
            observers,
            scoped,
            completed: 0,
            finished: false,
        }
    }

    /// Returns the method label.
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Returns the number of iterations produced so far.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    fn finish(&mut self, reason: &'static str) {
        self.finished = true;
        debug!(
            method = self.method,
            iterations = self.completed,
            reason,
            "run finished"
        );
    }

    fn notify(&mut self, iteration: &Iteration) {
        for observer in self.observers.iter_mut() {
            observer.observe(iteration);
        }
        if let Some(observer) = self.scoped.as_deref_mut() {
            observer.observe(iteration);
        }
    }
}

impl Iterator for Iterations<'_> {
    type Item = Result<Iteration, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.config.allows_step(self.completed) {
            self.finish("iteration cap reached");
            return None;
        }

        match self.state.step(self.function) {
            Ok(Some(estimate)) => {
                self.completed += 1;
                let iteration = Iteration {
                    index: self.completed,
                    x: estimate.x,
                    fx: estimate.fx,
                };
                trace!(
                    method = self.method,
                    index = iteration.index,
                    x = iteration.x,
                    fx = iteration.fx,
                    "step"
                );
                self.notify(&iteration);
                Some(Ok(iteration))
            }
            Ok(None) => {
                self.finish("converged");
                None
            }
            Err(error) => {
                self.finished = true;
                debug!(method = self.method, iterations = self.completed, %error, "run failed");
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Iterations<'_> {}
