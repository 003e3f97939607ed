//! Iterative scalar root-finding methods behind one pull-driven contract.
//!
//! Every method is driven through [`RootSolver`]: a call to
//! [`iterate`](RootSolver::iterate) validates the problem and returns a lazy
//! [`Iterations`] sequence. Each produced [`Iteration`] reaches the solver's
//! observers before the caller sees it.
//!
//! # Methods
//!
//! | Method | Needs | Derivative |
//! |--------|-------|------------|
//! | [`Bisection`] | interval | no |
//! | [`RegulaFalsi`] | interval | no |
//! | [`ModifiedRegulaFalsi`] | interval | no |
//! | [`Newton`] | one guess | yes |
//! | [`RefinedNewton`] | one guess, root multiplicity | yes |
//! | [`Secant`] | two guesses | no |
//! | [`Steffensen`] | one guess | no |
//!
//! # Example
//!
//! ```
//! use rootscope_core::{Function, Interval, Problem, SolverConfig};
//! use rootscope_solvers::{Bisection, RootSolver, Solver};
//!
//! let f = Function::new("x^2 - 2", |x| x * x - 2.0);
//! let problem = Problem::builder(f)
//!     .interval(Interval::new(0.0, 2.0)?)
//!     .build()?;
//!
//! let mut solver = Solver::new(Bisection, SolverConfig::new(1e-6)?);
//! let last = solver.iterate(&problem)?.last().transpose()?;
//!
//! assert!(last.is_some_and(|it| (it.x - 2f64.sqrt()).abs() < 1e-6));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Iteration`]: rootscope_core::Iteration

mod bisection;
mod error;
mod iterations;
mod method;
mod newton;
mod regula_falsi;
mod secant;
mod solver;
mod steffensen;

pub use bisection::{Bisection, BisectionState};
pub use error::{Error, Instability, Requirement};
pub use iterations::Iterations;
pub use method::{Estimate, Method, Step};
pub use newton::{Newton, NewtonState, RefinedNewton};
pub use regula_falsi::{ModifiedRegulaFalsi, RegulaFalsi, RegulaFalsiState};
pub use secant::{Secant, SecantState};
pub use solver::{RootSolver, Solver};
pub use steffensen::{Steffensen, SteffensenState};
