use std::fmt;

use thiserror::Error;

use rootscope_core::FunctionError;

/// Errors that can occur during a root-finding run.
///
/// Errors abort the run where they are detected; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{method} requires {requirement}")]
    MissingProblemData {
        method: &'static str,
        requirement: Requirement,
    },

    #[error("no root in interval: f({a})={fa}, f({b})={fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error(transparent)]
    DerivativeUndefined(#[from] FunctionError),

    #[error("numerical instability in {method} at x = {x}: {reason}")]
    NumericalInstability {
        method: &'static str,
        x: f64,
        reason: Instability,
    },
}

/// The piece of problem data a method starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Interval,
    OneGuess,
    TwoGuesses,
    RootMultiplicity,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Interval => "an interval (a, b)",
            Self::OneGuess => "one initial guess",
            Self::TwoGuesses => "two initial guesses",
            Self::RootMultiplicity => "a root multiplicity",
        };
        f.write_str(text)
    }
}

/// Why a step could not produce a usable approximation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Instability {
    #[error("update denominator vanished")]
    ZeroDenominator,

    #[error("non-finite value")]
    NonFinite,
}

impl Error {
    pub(crate) fn missing(method: &'static str, requirement: Requirement) -> Self {
        Self::MissingProblemData {
            method,
            requirement,
        }
    }

    pub(crate) fn unstable(method: &'static str, x: f64, reason: Instability) -> Self {
        Self::NumericalInstability { method, x, reason }
    }
}
