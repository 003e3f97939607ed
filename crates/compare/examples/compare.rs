//! Compares every method on `x^3 - 2x - 5` and prints a summary table.
//!
//! Set `RUST_LOG=rootscope=debug` (or `trace`) to follow the runs.

use std::error::Error;

use rootscope_compare::{ComparisonService, Methods};
use rootscope_core::{
    Function, Interval, OneGuess, Problem, RootMultiplicity, SolverConfig, TwoGuesses,
};
use rootscope_observers::{MonotonicTimer, TracingObserver};
use rootscope_solvers::{
    Bisection, ModifiedRegulaFalsi, Newton, RefinedNewton, RegulaFalsi, Secant, Solver, Steffensen,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let f = Function::new("x^3 - 2x - 5", |x| x * x * x - 2.0 * x - 5.0)
        .with_derivative(|x| 3.0 * x * x - 2.0);
    let problem = Problem::builder(f)
        .interval(Interval::new(2.0, 3.0)?)
        .one_guess(OneGuess::new(2.0)?)
        .two_guesses(TwoGuesses::new(2.0, 3.0)?)
        .root_multiplicity(RootMultiplicity::new(1.0)?)
        .build()?;

    let config = SolverConfig::new(1e-9)?.with_max_iterations(1_000)?;
    let mut methods = Methods::new()
        .with("bisection", Solver::new(Bisection, config))
        .with("regula falsi", Solver::new(RegulaFalsi, config))
        .with("modified regula falsi", Solver::new(ModifiedRegulaFalsi, config))
        .with(
            "newton",
            Solver::new(Newton, config).with_observer(TracingObserver::new("newton")),
        )
        .with("refined newton", Solver::new(RefinedNewton, config))
        .with("secant", Solver::new(Secant, config))
        .with("steffensen", Solver::new(Steffensen, config));

    let result = ComparisonService::new(MonotonicTimer::new())
        .without_function_curves()
        .compare(&mut methods, &problem);

    println!("{:<24}{:>22}{:>8}{:>14}", "method", "root", "iters", "time [us]");
    for element in &result.elements {
        let elapsed = element.residual_curve.times.last().copied().unwrap_or_default();
        println!(
            "{:<24}{:>22.16}{:>8}{:>14.1}",
            element.method_name,
            element.root,
            element.iterations,
            elapsed * 1e6
        );
    }
    for failure in &result.failures {
        println!("{:<24}failed: {}", failure.method_name, failure.error);
    }

    Ok(())
}
