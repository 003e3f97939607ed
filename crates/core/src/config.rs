use thiserror::Error;

/// Convergence tolerance and optional iteration cap shared by all methods.
///
/// A single config is typically reused across methods so that comparisons
/// are fair. Without a cap a run only ends when the method's own stopping
/// rule fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    eps: f64,
    max_iterations: Option<usize>,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and positive")]
    Eps,

    #[error("max_iterations must be positive")]
    MaxIterations,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            eps: 1e-10,
            max_iterations: None,
        }
    }
}

impl SolverConfig {
    /// Creates an unbounded config with the given tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive.
    pub fn new(eps: f64) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps);
        }

        Ok(Self {
            eps,
            max_iterations: None,
        })
    }

    /// Caps the number of iterations per run.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::MaxIterations);
        }
        self.max_iterations = Some(max_iterations);
        Ok(self)
    }

    /// Removes the iteration cap.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the iteration cap, or `None` when unbounded.
    #[must_use]
    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Returns true if another step may start after `completed` steps.
    #[must_use]
    pub fn allows_step(&self, completed: usize) -> bool {
        self.max_iterations.is_none_or(|max| completed < max)
    }
}
