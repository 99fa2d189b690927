use thiserror::Error;

use crate::store::StoreError;
use crate::weather::WeatherError;

/// Validation errors rejected at the boundary, before any storage access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("destination name cannot be empty")]
    EmptyName,
    #[error("destination name length {len} exceeds max {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("temperature must be a number: '{value}'")]
    TemperatureNotNumeric { value: String },
    #[error("temperature must be finite")]
    NonFiniteTemperature,

    #[error("field '{field}' is required")]
    MissingField { field: &'static str },
}

/// Top-level error type for destination service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("destination '{name}' already exists")]
    Conflict { name: String },

    #[error("destination '{name}' not found")]
    NotFound { name: String },

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { name } => Self::Conflict { name },
            StoreError::NotFound { name } => Self::NotFound { name },
            other => Self::Store(other),
        }
    }
}
