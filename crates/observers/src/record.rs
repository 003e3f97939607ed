use std::{cell::RefCell, rc::Rc};

use rootscope_core::{Iteration, Observer};

/// Keeps a copy of every observed iteration.
///
/// Registered observers are boxed and owned by the solver, so `Recorder` is
/// a cheap handle: register one clone and read the log through another.
///
/// ```
/// use rootscope_core::{Function, OneGuess, Problem, SolverConfig};
/// use rootscope_observers::Recorder;
/// use rootscope_solvers::{RootSolver, Solver, Steffensen};
///
/// let f = Function::new("x - cos(x)", |x| x - x.cos());
/// let problem = Problem::builder(f).one_guess(OneGuess::new(1.0)?).build()?;
///
/// let recorder = Recorder::new();
/// let mut solver = Solver::new(Steffensen, SolverConfig::new(1e-6)?)
///     .with_observer(recorder.clone());
///
/// let steps = solver.iterate(&problem)?.count();
/// assert_eq!(recorder.len(), steps);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Iteration>>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the iterations recorded so far.
    #[must_use]
    pub fn iterations(&self) -> Vec<Iteration> {
        self.log.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// Empties the log and returns what it held.
    pub fn take(&self) -> Vec<Iteration> {
        self.log.take()
    }
}

impl Observer<Iteration> for Recorder {
    fn observe(&mut self, event: &Iteration) {
        self.log.borrow_mut().push(*event);
    }
}
