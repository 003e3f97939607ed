use std::fmt;

use thiserror::Error;

type RealFn = Box<dyn Fn(f64) -> f64>;

/// Errors that can occur when evaluating a [`Function`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// The derivative was requested but none was supplied.
    #[error("derivative is not defined for function `{name}`")]
    DerivativeUndefined { name: String },
}

/// A named scalar function with an optional analytic derivative.
///
/// Asking for the derivative of a function built without one is an error,
/// never a silent numerical fallback.
pub struct Function {
    name: String,
    f: RealFn,
    df: Option<RealFn>,
}

impl Function {
    /// Creates a function without a derivative.
    pub fn new(name: impl Into<String>, f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self {
            name: name.into(),
            f: Box::new(f),
            df: None,
        }
    }

    /// Attaches an analytic derivative.
    #[must_use]
    pub fn with_derivative(mut self, df: impl Fn(f64) -> f64 + 'static) -> Self {
        self.df = Some(Box::new(df));
        self
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn call(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    /// Evaluates the derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::DerivativeUndefined`] if the function was
    /// built without a derivative.
    pub fn derivative(&self, x: f64) -> Result<f64, FunctionError> {
        match &self.df {
            Some(df) => Ok(df(x)),
            None => Err(FunctionError::DerivativeUndefined {
                name: self.name.clone(),
            }),
        }
    }

    /// Returns true if an analytic derivative was supplied.
    #[must_use]
    pub fn has_derivative(&self) -> bool {
        self.df.is_some()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("has_derivative", &self.has_derivative())
            .finish_non_exhaustive()
    }
}
