use std::time::Instant;

use rootscope_core::{Iteration, Observer, Timer};

/// Records the elapsed time at which each iteration was produced.
///
/// The clock starts when the observer is created, so create it right before
/// the run it should time. Each observed iteration costs exactly one clock
/// read, and the recorded offsets are never negative for a monotonic timer.
///
/// # Example
///
/// ```
/// use rootscope_core::{Function, OneGuess, Problem, SolverConfig};
/// use rootscope_observers::{MonotonicTimer, TimeObserver};
/// use rootscope_solvers::{Newton, RootSolver, Solver};
///
/// let f = Function::new("x^2 - 2", |x| x * x - 2.0).with_derivative(|x| 2.0 * x);
/// let problem = Problem::builder(f).one_guess(OneGuess::new(1.0)?).build()?;
/// let mut solver = Solver::new(Newton, SolverConfig::default());
///
/// let timer = MonotonicTimer::new();
/// let mut times = TimeObserver::start(&timer);
/// let steps = solver.iterate_with(&problem, Some(&mut times))?.count();
///
/// assert_eq!(times.times().len(), steps);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct TimeObserver<'t> {
    timer: &'t dyn Timer,
    start: f64,
    times: Vec<f64>,
}

impl<'t> TimeObserver<'t> {
    /// Reads the timer once to fix the start of the run.
    pub fn start(timer: &'t dyn Timer) -> Self {
        Self {
            timer,
            start: timer.now(),
            times: Vec::new(),
        }
    }

    /// Returns the elapsed seconds recorded so far, one per iteration.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Consumes the observer and returns the recorded offsets.
    #[must_use]
    pub fn into_times(self) -> Vec<f64> {
        self.times
    }

    fn record(&mut self) {
        self.times.push(self.timer.now() - self.start);
    }
}

impl Observer<Iteration> for TimeObserver<'_> {
    fn observe(&mut self, _event: &Iteration) {
        self.record();
    }
}

impl Observer<Iteration> for &mut TimeObserver<'_> {
    fn observe(&mut self, _event: &Iteration) {
        self.record();
    }
}

/// A [`Timer`] backed by [`Instant`], reporting seconds since its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTimer {
    origin: Instant,
}

impl MonotonicTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for MonotonicTimer {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;
    use rootscope_core::{Function, Interval, Problem, SolverConfig};
    use rootscope_solvers::{Bisection, RootSolver, Solver};

    use super::*;

    fn iteration(index: usize) -> Iteration {
        Iteration {
            index,
            x: 0.0,
            fx: 0.0,
        }
    }

    #[test]
    fn records_offsets_from_creation() {
        let clock = Cell::new(10.0);
        let timer = || {
            clock.set(clock.get() + 0.25);
            clock.get()
        };

        let mut observer = TimeObserver::start(&timer);
        observer.observe(&iteration(1));
        observer.observe(&iteration(2));

        assert_eq!(observer.times().len(), 2);
        assert_relative_eq!(observer.times()[0], 0.25);
        assert_relative_eq!(observer.into_times()[1], 0.5);
    }

    #[test]
    fn mutable_reference_observes_through() {
        let timer = || 1.0;
        let mut observer = TimeObserver::start(&timer);

        fn feed(mut observer: impl Observer<Iteration>) {
            observer.observe(&iteration(1));
        }
        feed(&mut observer);

        assert_eq!(observer.times(), [0.0]);
    }

    #[test]
    fn one_offset_per_iteration_and_non_decreasing() {
        let f = Function::new("x^3 - 5", |x| x * x * x - 5.0);
        let problem = Problem::builder(f)
            .interval(Interval::new(0.0, 5.0).expect("valid"))
            .build()
            .expect("valid problem");
        let mut solver = Solver::new(Bisection, SolverConfig::new(1e-9).expect("valid"));

        let timer = MonotonicTimer::new();
        let mut observer = TimeObserver::start(&timer);
        let steps = solver
            .iterate_with(&problem, Some(&mut observer))
            .expect("valid run")
            .count();

        let times = observer.into_times();
        assert_eq!(times.len(), steps);
        assert!(times.iter().all(|t| *t >= 0.0));
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }
}
