//! Error types for peripleo-when decoding boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhenError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("Invalid era style: {0}")]
    InvalidEraStyle(String),
}

pub type Result<T> = std::result::Result<T, WhenError>;
