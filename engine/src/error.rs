//! Error types for the decision engine
//!
//! The engine degrades gracefully on odd numeric input, so the only runtime
//! failure is a structurally missing identifier. The remaining variants are
//! raised while loading reference data or policy at start-up.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Missing required identifier: {0}")]
    MissingIdentifier(&'static str),

    #[error("Invalid {table} entry '{id}': {reason}")]
    InvalidReferenceData {
        table: &'static str,
        id: String,
        reason: String,
    },

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Reference data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
