use proptest::prelude::*;
use rootscope_compare::{RootFindingResult, find_root};
use rootscope_core::{Function, Interval, OneGuess, Problem, SolverConfig, TwoGuesses};
use rootscope_observers::MonotonicTimer;
use rootscope_solvers::{
    Bisection, Error, Method, ModifiedRegulaFalsi, Newton, RefinedNewton, RegulaFalsi, RootSolver,
    Secant, Solver, Steffensen, Step,
};

/// `x^3 + x - c`: strictly increasing with `f' >= 1`, so one simple root.
fn cubic(c: f64) -> Function {
    Function::new("x^3 + x - c", move |x| x * x * x + x - c).with_derivative(|x| 3.0 * x * x + 1.0)
}

/// The real root of `x^3 + x - c`, by Cardano's formula.
fn cubic_root(c: f64) -> f64 {
    let d = (c * c / 4.0 + 1.0 / 27.0).sqrt();
    (c / 2.0 + d).cbrt() + (c / 2.0 - d).cbrt()
}

fn config(eps: f64) -> SolverConfig {
    SolverConfig::new(eps)
        .and_then(|c| c.with_max_iterations(10_000))
        .expect("valid config")
}

fn check_trajectory(result: &RootFindingResult, f: &Function) -> Result<(), TestCaseError> {
    prop_assert_eq!(result.approximations.len(), result.iterations);
    prop_assert_eq!(result.residuals.len(), result.iterations);
    prop_assert_eq!(result.times.len(), result.iterations);
    prop_assert_eq!(result.root, result.approximations[result.iterations - 1]);

    for (x, r) in result.approximations.iter().zip(&result.residuals) {
        prop_assert_eq!(*r, f.call(*x).abs());
    }
    prop_assert!(result.times.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}

proptest! {
    #[test]
    fn trajectories_are_consistent(
        c in -20.0f64..20.0,
        below in 0.1f64..5.0,
        above in 0.1f64..5.0,
    ) {
        let root = cubic_root(c);
        let problem = Problem::builder(cubic(c))
            .interval(Interval::new(root - below, root + above).expect("valid"))
            .one_guess(OneGuess::new(root + above).expect("valid"))
            .build()
            .expect("valid problem");

        let solvers: Vec<Box<dyn RootSolver>> = vec![
            Box::new(Solver::new(Bisection, config(1e-9))),
            Box::new(Solver::new(RegulaFalsi, config(1e-9))),
            Box::new(Solver::new(ModifiedRegulaFalsi, config(1e-9))),
            Box::new(Solver::new(Newton, config(1e-9))),
        ];

        let timer = MonotonicTimer::new();
        for mut solver in solvers {
            let result = find_root(solver.as_mut(), &problem, &timer).expect("converges");
            check_trajectory(&result, problem.function())?;
        }
    }

    #[test]
    fn bisection_ends_with_a_narrow_bracket_inside_the_input(
        c in -20.0f64..20.0,
        below in 0.1f64..5.0,
        above in 0.1f64..5.0,
        eps in 1e-12f64..1e-2,
    ) {
        let root = cubic_root(c);
        let (a, b) = (root - below, root + above);
        let problem = Problem::builder(cubic(c))
            .interval(Interval::new(a, b).expect("valid"))
            .build()
            .expect("valid problem");

        let mut state = Bisection
            .init(&problem, &SolverConfig::new(eps).expect("valid"))
            .expect("brackets");
        let mut last = None;
        while let Some(estimate) = state.step(problem.function()).expect("step") {
            last = Some(estimate.x);
        }

        let (lo, hi) = state.bounds();
        prop_assert!(hi - lo <= eps);
        let x = last.expect("interval wider than eps");
        prop_assert!(a <= x && x <= b);
        prop_assert!(lo <= root + 1e-9 && root - 1e-9 <= hi);
    }

    #[test]
    fn regula_falsi_stops_on_its_metric(
        c in -20.0f64..20.0,
        below in 0.1f64..5.0,
        above in 0.1f64..5.0,
        eps in 1e-10f64..1e-3,
        damped in any::<bool>(),
    ) {
        let root = cubic_root(c);
        let problem = Problem::builder(cubic(c))
            .interval(Interval::new(root - below, root + above).expect("valid"))
            .build()
            .expect("valid problem");
        let config = SolverConfig::new(eps).expect("valid");

        let mut state = if damped {
            ModifiedRegulaFalsi.init(&problem, &config)
        } else {
            RegulaFalsi.init(&problem, &config)
        }
        .expect("brackets");

        let mut steps = 0;
        while state.step(problem.function()).expect("step").is_some() {
            steps += 1;
            prop_assert!(steps < 100_000);
        }
        prop_assert!(state.ea() < eps);
    }

    #[test]
    fn open_methods_always_yield_a_first_step(
        slope in 0.5f64..5.0,
        root in -10.0f64..10.0,
    ) {
        let eps = 1e-8;
        let f = || {
            Function::new("k(x - r)", move |x| slope * (x - root)).with_derivative(move |_| slope)
        };
        let at_root = |f: Function| {
            Problem::builder(f)
                .one_guess(OneGuess::new(root).expect("valid"))
                .two_guesses(TwoGuesses::new(root, root + eps / 4.0).expect("valid"))
                .build()
                .expect("valid problem")
        };

        let mut solvers: Vec<Box<dyn RootSolver>> = vec![
            Box::new(Solver::new(Newton, config(eps))),
            Box::new(Solver::new(Steffensen, config(eps))),
            Box::new(Solver::new(Secant, config(eps))),
        ];
        for solver in &mut solvers {
            let problem = at_root(f());
            let count = solver.iterate(&problem).expect("valid run").count();
            prop_assert_eq!(count, 1);
        }
    }

    #[test]
    fn derivative_is_needed_only_by_newton_variants(
        root in -10.0f64..10.0,
        offset in 0.5f64..3.0,
    ) {
        let problem = Problem::builder(Function::new("x - r", move |x| x - root))
            .interval(Interval::new(root - offset, root + offset).expect("valid"))
            .one_guess(OneGuess::new(root + offset).expect("valid"))
            .two_guesses(TwoGuesses::new(root - offset, root + offset).expect("valid"))
            .root_multiplicity(rootscope_core::RootMultiplicity::new(1.0).expect("valid"))
            .build()
            .expect("valid problem");

        let mut solvers: Vec<Box<dyn RootSolver>> = vec![
            Box::new(Solver::new(Bisection, config(1e-6))),
            Box::new(Solver::new(RegulaFalsi, config(1e-6))),
            Box::new(Solver::new(ModifiedRegulaFalsi, config(1e-6))),
            Box::new(Solver::new(Newton, config(1e-6))),
            Box::new(Solver::new(RefinedNewton, config(1e-6))),
            Box::new(Solver::new(Secant, config(1e-6))),
            Box::new(Solver::new(Steffensen, config(1e-6))),
        ];

        let timer = MonotonicTimer::new();
        for solver in &mut solvers {
            let needs_derivative = matches!(solver.name(), "newton" | "refined newton");
            let outcome = find_root(solver.as_mut(), &problem, &timer);
            let missing = matches!(
                outcome,
                Err(rootscope_compare::RunError::Solver(Error::DerivativeUndefined(_)))
            );
            prop_assert_eq!(missing, needs_derivative, "{}", solver.name());
        }
    }
}
