//! Error types for the generator core
//!
//! Every variant is a caller input error. Errors are detected before any
//! generator state is touched, so a rejected call never advances the stream.

use thiserror::Error;

/// Errors returned by seeding, range mapping, sampling and restore operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RngError {
    #[error("Random cannot support more than 2 arguments (got {count})")]
    InvalidArgumentCount { count: usize },

    #[error("Invalid bound: {0}")]
    InvalidBoundType(String),

    #[error("The max value ({max}) cannot be less than the min value ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Upper bound must be greater than zero")]
    ZeroBound,

    #[error("Seed sequence must contain at least one value")]
    EmptySeedSequence,

    #[error("Charset must contain at least one character")]
    EmptyCharset,

    #[error("Weight cannot be less than 0 (index {index}: {weight})")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl RngError {
    /// True for errors the binding layer should surface as type errors
    pub fn is_type_error(&self) -> bool {
        matches!(self, RngError::InvalidBoundType(_))
    }
}
