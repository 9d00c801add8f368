//! Error types for the spanfeat library.
//!
//! All errors are represented by the [`SpanfeatError`] enum. Context strategies
//! never fail on their own: out-of-bounds positions are modeled as placeholder
//! features, not errors. What can fail is configuration (caught when a
//! strategy or extractor is built), caller preconditions, and the
//! caller-supplied base extractors, whose errors pass through unchanged.
//!
//! # Examples
//!
//! ```
//! use spanfeat::error::{Result, SpanfeatError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpanfeatError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spanfeat operations.
#[derive(Error, Debug)]
pub enum SpanfeatError {
    /// I/O errors (reading configs or input documents)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration (window bounds, empty wrappers, bad config files)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Caller precondition violations
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failures raised by base extractors
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors raised by caller-supplied collaborators
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpanfeatError.
pub type Result<T> = std::result::Result<T, SpanfeatError>;

impl SpanfeatError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpanfeatError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpanfeatError::InvalidArgument(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        SpanfeatError::Extraction(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpanfeatError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpanfeatError::Other(msg.into())
    }
}
