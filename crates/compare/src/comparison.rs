use std::fmt;

use rootscope_core::{Problem, Timer};
use rootscope_solvers::RootSolver;
use tracing::{debug, warn};

use crate::{RunError, run::find_root};

/// Named solvers, kept in insertion order.
///
/// Inserting under an existing name replaces that solver in place, so the
/// order of a comparison is the order names were first seen.
#[derive(Default)]
pub struct Methods {
    entries: Vec<(String, Box<dyn RootSolver>)>,
}

impl Methods {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a solver, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, solver: impl RootSolver + 'static) -> Self {
        self.insert(name, Box::new(solver));
        self
    }

    /// Adds a solver, returning the one it replaced, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        solver: Box<dyn RootSolver>,
    ) -> Option<Box<dyn RootSolver>> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, solver)),
            None => {
                self.entries.push((name, solver));
                None
            }
        }
    }

    /// Returns the solver registered under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn RootSolver + 'static)> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, solver)| solver.as_mut())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Methods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, solver)| (name, solver.name())))
            .finish()
    }
}

/// Residual magnitude against elapsed time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResidualCurve {
    pub times: Vec<f64>,
    pub residuals: Vec<f64>,
}

/// Function value at each approximation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCurve {
    pub approximations: Vec<f64>,
    pub f_at_approximations: Vec<f64>,
}

/// One method's successful run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonElement {
    pub method_name: String,
    pub root: f64,
    pub residual_curve: ResidualCurve,
    /// `None` when the service was built without function curves.
    pub function_curve: Option<FunctionCurve>,
    pub iterations: usize,
}

/// One method's failed run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodFailure {
    pub method_name: String,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
    pub error: RunError,
}

/// The outcome of comparing several methods on one problem.
///
/// Both lists follow the insertion order of the compared [`Methods`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonResult {
    pub elements: Vec<ComparisonElement>,
    pub failures: Vec<MethodFailure>,
}

impl ComparisonResult {
    /// Returns the successful run recorded under `name`.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&ComparisonElement> {
        self.elements.iter().find(|e| e.method_name == name)
    }

    /// Returns the failure recorded under `name`.
    #[must_use]
    pub fn failure(&self, name: &str) -> Option<&MethodFailure> {
        self.failures.iter().find(|e| e.method_name == name)
    }

    /// Returns true if no method failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs several methods on the same problem and gathers their curves.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonService<T> {
    timer: T,
    function_curves: bool,
}

impl<T: Timer> ComparisonService<T> {
    /// Creates a service that records function curves.
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            function_curves: true,
        }
    }

    /// Skips the function curve, which costs one extra evaluation per
    /// approximation.
    #[must_use]
    pub fn without_function_curves(mut self) -> Self {
        self.function_curves = false;
        self
    }

    /// Runs every method in insertion order.
    ///
    /// Runs are sequential and independent. A failing method is recorded in
    /// [`ComparisonResult::failures`] and the remaining methods still run.
    pub fn compare(&self, methods: &mut Methods, problem: &Problem) -> ComparisonResult {
        let mut result = ComparisonResult::default();

        for (name, solver) in &mut methods.entries {
            debug!(method = %name, solver = solver.name(), "comparing");

            match find_root(solver.as_mut(), problem, &self.timer) {
                Ok(run) => {
                    let function_curve = self.function_curves.then(|| FunctionCurve {
                        f_at_approximations: run
                            .approximations
                            .iter()
                            .map(|&x| problem.function().call(x))
                            .collect(),
                        approximations: run.approximations.clone(),
                    });

                    result.elements.push(ComparisonElement {
                        method_name: name.clone(),
                        root: run.root,
                        residual_curve: ResidualCurve {
                            times: run.times,
                            residuals: run.residuals,
                        },
                        function_curve,
                        iterations: run.iterations,
                    });
                }
                Err(error) => {
                    warn!(method = %name, %error, "method failed");
                    result.failures.push(MethodFailure {
                        method_name: name.clone(),
                        error,
                    });
                }
            }
        }

        result
    }
}

#[cfg(feature = "serde")]
fn serialize_display<S: serde::Serializer>(
    value: &impl fmt::Display,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
