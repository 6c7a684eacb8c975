use thiserror::Error;

use crate::shared::AppError;

/// Failures an award request can surface to the caller.
///
/// Validation and lookup failures are raised before any mutation, so a
/// rejected request never leaves a partial card behind.
#[derive(Debug, Error)]
pub enum RewardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Character not found: {0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<RewardError> for AppError {
    fn from(err: RewardError) -> Self {
        match err {
            RewardError::InvalidInput(_) => AppError::InvalidInput(err.to_string()),
            RewardError::NotFound(_) => AppError::NotFound(err.to_string()),
            RewardError::Unexpected(_) => AppError::Internal,
        }
    }
}
