//! Error types.
//!
//! - `PllError` is what the solver library returns.
//! - `AppError` is what the `pll` binary reports (message + process exit code).

use std::fmt;

use thiserror::Error;

/// Which input value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    OutputCount,
    InputFrequency,
    OutputFrequency { index: usize },
    OutputTolerance { index: usize },
    OutputWeight { index: usize },
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::OutputCount => write!(f, "output count"),
            Parameter::InputFrequency => write!(f, "input frequency"),
            Parameter::OutputFrequency { index } => write!(f, "output {index} frequency"),
            Parameter::OutputTolerance { index } => write!(f, "output {index} tolerance"),
            Parameter::OutputWeight { index } => write!(f, "output {index} weight"),
        }
    }
}

/// Solver failures.
///
/// Per-pair infeasibility during the search is not represented here; it only
/// discards that candidate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PllError {
    #[error("Invalid {parameter}: {reason}")]
    InvalidParameter { parameter: Parameter, reason: String },

    #[error("Could not find a PLL configuration satisfying all requested outputs")]
    NoSolution,
}

impl PllError {
    pub(crate) fn invalid(parameter: Parameter, reason: impl Into<String>) -> Self {
        PllError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<PllError> for AppError {
    fn from(err: PllError) -> Self {
        let exit_code = match err {
            PllError::InvalidParameter { .. } => 2,
            PllError::NoSolution => 3,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
