//! Error types for the Yixiang library.
//!
//! The extraction core never fails on bad input: missing stop-word files,
//! malformed work records and per-work segmentation failures all degrade
//! with a diagnostic. Errors surface only from the outer layer
//! (configuration, segmenter construction, output rendering).
//!
//! # Examples
//!
//! ```
//! use yixiang::error::{Result, YixiangError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(YixiangError::config("top_n must be positive"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Yixiang operations.
#[derive(Error, Debug)]
pub enum YixiangError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (segmentation, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Corpus loading errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with YixiangError.
pub type Result<T> = std::result::Result<T, YixiangError>;

impl YixiangError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        YixiangError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        YixiangError::Config(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        YixiangError::Corpus(msg.into())
    }
}
