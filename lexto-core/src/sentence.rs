//! Sentence spans and the sources that produce them
//!
//! Sentence boundary detection is not this crate's job: the tokenizer only
//! consumes `(start, end)` spans. Any iterator of [`SentenceSpan`]s is a
//! [`SentenceSource`]; [`TerminatorSplitter`] and [`WholeText`] are simple
//! defaults for callers without a dedicated splitter.

use crate::error::{CoreError, Result};
use std::ops::Range;

/// Terminators used by [`TerminatorSplitter::new`]
pub const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?', '\n'];

/// Half-open byte range `[start, end)` of one sentence in a shared buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceSpan {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl SentenceSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes (zero for reversed spans)
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no text
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that the span can be sliced out of `buffer`
    pub fn validate(&self, buffer: &str) -> Result<()> {
        if self.start > self.end || self.end > buffer.len() {
            return Err(CoreError::InvalidSpan {
                start: self.start,
                end: self.end,
                len: buffer.len(),
            });
        }
        for offset in [self.start, self.end] {
            if !buffer.is_char_boundary(offset) {
                return Err(CoreError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }
}

impl From<(usize, usize)> for SentenceSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<Range<usize>> for SentenceSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Supplier of successive sentence spans for one buffer
///
/// Spans must be non-overlapping and increasing. `None` means the buffer has
/// no further sentences.
pub trait SentenceSource {
    /// Next sentence span, if any
    fn next_span(&mut self) -> Option<SentenceSpan>;
}

impl<I> SentenceSource for I
where
    I: Iterator<Item = SentenceSpan>,
{
    fn next_span(&mut self) -> Option<SentenceSpan> {
        self.next()
    }
}

/// Treats the whole buffer as a single sentence
#[derive(Debug, Clone)]
pub struct WholeText {
    span: Option<SentenceSpan>,
}

impl WholeText {
    /// Source yielding one span over `text`, or nothing if it is empty
    pub fn new(text: &str) -> Self {
        let span = (!text.is_empty()).then(|| SentenceSpan::new(0, text.len()));
        Self { span }
    }
}

impl Iterator for WholeText {
    type Item = SentenceSpan;

    fn next(&mut self) -> Option<SentenceSpan> {
        self.span.take()
    }
}

/// Punctuation-driven sentence splitter
///
/// A sentence ends after a run of terminator characters that is followed by
/// whitespace or the end of the text. Whitespace after the terminators stays
/// with the sentence it follows, so the spans are contiguous and cover the
/// buffer. A terminator that is itself whitespace (`'\n'` by default) forces
/// a break even when no further whitespace follows. Decimal points such as
/// `3.14` do not split because no whitespace follows the dot.
#[derive(Debug, Clone)]
pub struct TerminatorSplitter<'a> {
    text: &'a str,
    terminators: Vec<char>,
    position: usize,
}

impl<'a> TerminatorSplitter<'a> {
    /// Splitter using [`DEFAULT_TERMINATORS`]
    pub fn new(text: &'a str) -> Self {
        Self::with_terminators(text, DEFAULT_TERMINATORS.iter().copied())
    }

    /// Splitter with a custom terminator set
    pub fn with_terminators(text: &'a str, terminators: impl IntoIterator<Item = char>) -> Self {
        Self {
            text,
            terminators: terminators.into_iter().collect(),
            position: 0,
        }
    }

    /// Find where the sentence starting at `start` ends
    fn find_end(&self, start: usize) -> usize {
        let mut chars = self.text[start..].char_indices().peekable();
        let mut after_terminator = false;
        let mut hard_break = false;

        while let Some((i, ch)) = chars.next() {
            if self.terminators.contains(&ch) {
                after_terminator = true;
                hard_break |= ch.is_whitespace();
                continue;
            }
            if !after_terminator {
                continue;
            }
            if ch.is_whitespace() {
                let mut end = start + i + ch.len_utf8();
                while let Some(&(j, next)) = chars.peek() {
                    if !next.is_whitespace() {
                        break;
                    }
                    end = start + j + next.len_utf8();
                    chars.next();
                }
                return end;
            }
            if hard_break {
                return start + i;
            }
            after_terminator = false;
        }

        self.text.len()
    }
}

impl Iterator for TerminatorSplitter<'_> {
    type Item = SentenceSpan;

    fn next(&mut self) -> Option<SentenceSpan> {
        let start = self.position;
        if start >= self.text.len() {
            return None;
        }
        let end = self.find_end(start);
        self.position = end;
        Some(SentenceSpan::new(start, end))
    }
}
