// src/services/error.rs

use thiserror::Error;

/// Message shown to the traveler for any upstream failure
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("A request is already in progress")]
    InFlight,

    /// Upstream failure; `detail` is for logs only
    #[error("Something went wrong. Please try again.")]
    Provider { detail: String },

    #[error("{0}")]
    Empty(&'static str),

    #[error("{0}")]
    InvalidInput(String),
}

impl GenerationError {
    pub fn provider(err: impl std::fmt::Display) -> Self {
        GenerationError::Provider {
            detail: err.to_string(),
        }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;
