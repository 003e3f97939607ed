//! Core traits and types for rootscope.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! the comparison harness build on:
//!
//! - [`Function`] — a scalar function with an optional analytic derivative
//! - [`Problem`] — a function plus the initializing data methods need
//!   ([`Interval`], [`OneGuess`], [`TwoGuesses`], [`RootMultiplicity`])
//! - [`SolverConfig`] — convergence tolerance and optional iteration cap
//! - [`Iteration`] — the record every method emits per step
//! - [`Observer`] — receives solver events as they happen
//! - [`Timer`] — an injected elapsed-time capability

mod config;
mod function;
mod iteration;
mod observer;
mod problem;
mod timer;

pub use config::{ConfigError, SolverConfig};
pub use function::{Function, FunctionError};
pub use iteration::Iteration;
pub use observer::Observer;
pub use problem::{
    Interval, OneGuess, Problem, ProblemBuilder, ProblemError, RootMultiplicity, TwoGuesses,
};
pub use timer::Timer;
