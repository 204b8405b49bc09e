//! Error types for the FitFlow core

use thiserror::Error;

/// Errors raised by the calculation and document-transition functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown workout split: {0}")]
    InvalidSplit(String),

    #[error("Unknown challenge category: {0}")]
    InvalidChallengeCategory(String),
}

/// Result alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::InvalidInput(crate::validation::describe_errors(&errors))
    }
}
