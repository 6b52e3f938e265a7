//! Core error types (deterministic only)
//!
//! Segmentation itself cannot fail. The only errors at this layer are
//! contract violations by the sentence source feeding the tokenizer.

use thiserror::Error;

/// Core errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Span is reversed or extends past the end of the buffer
    #[error("invalid sentence span {start}..{end} for a buffer of {len} bytes")]
    InvalidSpan {
        /// Start offset of the rejected span
        start: usize,
        /// End offset of the rejected span
        end: usize,
        /// Length of the buffer in bytes
        len: usize,
    },

    /// Span starts before the previous span ended
    #[error("sentence span starting at {start} overlaps previous span ending at {previous_end}")]
    OverlappingSpan {
        /// Start offset of the rejected span
        start: usize,
        /// End offset of the previously accepted span
        previous_end: usize,
    },

    /// Offset falls inside a multi-byte character
    #[error("offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary {
        /// The offending byte offset
        offset: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
