//! Timed root-finding runs and side-by-side method comparison.
//!
//! [`find_root`] drains one solver run into a [`RootFindingResult`], timing
//! each iteration with a run-scoped observer. [`ComparisonService`] repeats
//! that for every entry in a set of named [`Methods`] and gathers residual
//! and function curves ready for plotting.
//!
//! # Example
//!
//! ```
//! use rootscope_compare::{ComparisonService, Methods};
//! use rootscope_core::{Function, Interval, OneGuess, Problem, SolverConfig};
//! use rootscope_observers::MonotonicTimer;
//! use rootscope_solvers::{Bisection, Newton, Solver};
//!
//! let f = Function::new("x^2 - 2", |x| x * x - 2.0).with_derivative(|x| 2.0 * x);
//! let problem = Problem::builder(f)
//!     .interval(Interval::new(0.0, 2.0)?)
//!     .one_guess(OneGuess::new(1.0)?)
//!     .build()?;
//!
//! let config = SolverConfig::new(1e-6)?;
//! let mut methods = Methods::new()
//!     .with("bisection", Solver::new(Bisection, config))
//!     .with("newton", Solver::new(Newton, config));
//!
//! let result = ComparisonService::new(MonotonicTimer::new()).compare(&mut methods, &problem);
//! assert_eq!(result.elements.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `serde` — derives `Serialize` on results and curves.

mod comparison;
mod run;

pub use comparison::{
    ComparisonElement, ComparisonResult, ComparisonService, FunctionCurve, MethodFailure, Methods,
    ResidualCurve,
};
pub use run::{RootFindingResult, RootFindingService, RunError, find_root};
