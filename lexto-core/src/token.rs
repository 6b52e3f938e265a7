//! Emitted word tokens

use std::ops::Range;

/// One word with its buffer-absolute byte offsets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The word text
    pub text: String,
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// The word text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Offsets as a range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
