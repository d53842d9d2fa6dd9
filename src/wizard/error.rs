// src/wizard/error.rs
// Error types for wizard operations

use thiserror::Error;

/// Wizard error type. Every variant is recoverable by correcting input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The current step's completion rule does not hold
    #[error("{0}")]
    Validation(String),
    #[error("Step {index} ({title}) is not a {expected} step")]
    WrongStep {
        index: usize,
        title: &'static str,
        expected: &'static str,
    },
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl WizardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Wizard operation result type
pub type WizardResult<T> = Result<T, WizardError>;
