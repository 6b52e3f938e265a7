//! Layered error types
//!
//! [`EngineError`] wraps the core's span errors and adds the failures that
//! only exist once I/O and configuration are involved.

use lexto_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core tokenizer error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Word list could not be read
    #[error("failed to read dictionary {origin}: {source}")]
    Dictionary {
        /// Path or description of the word list
        origin: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Document could not be read
    #[error("failed to read {origin}: {source}")]
    Read {
        /// Path or description of the document
        origin: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Word list contained no entries
    #[error("dictionary contains no words")]
    EmptyLexicon,

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Configuration file is not valid TOML
    #[error("failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
