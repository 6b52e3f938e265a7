//! Dictionary-based word segmentation for unsegmented text
//!
//! Languages such as Thai are written without spaces between words. This
//! crate recovers word boundaries from a fixed [`Lexicon`] by choosing, for
//! each sentence, the segmentation with the fewest dictionary-consistent
//! words (maximal matching). Characters that no dictionary entry covers fall
//! back to single-character words, so segmentation always succeeds.
//!
//! # Architecture
//!
//! - [`Lexicon`]: immutable word set, shared read-only between sessions
//! - [`Segmenter`]: shortest-path search over the word lattice of one sentence
//! - [`SentenceSource`]: spans supplied by an external sentence splitter
//! - [`SentenceTokenizer`]: pulls spans, segments them and emits [`Token`]s
//!   with buffer-absolute offsets
//!
//! This crate performs no I/O. Loading word lists from disk lives in
//! `lexto-engine`.
//!
//! # Example
//!
//! ```rust
//! use lexto_core::{Lexicon, Segmenter, SentenceTokenizer, TerminatorSplitter};
//! use std::sync::Arc;
//!
//! let lexicon = Arc::new(Lexicon::from_words(["ab", "cd", "c"]));
//! let segmenter = Segmenter::new(lexicon);
//!
//! let text = "abcd. cab";
//! let tokenizer = SentenceTokenizer::new(text, TerminatorSplitter::new(text), segmenter);
//! let words: Vec<String> = tokenizer
//!     .map(|token| token.map(|t| t.text))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(words, ["ab", "cd", ".", " ", "c", "ab"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod lexicon;
pub mod segmenter;
pub mod sentence;
pub mod token;
pub mod tokenizer;

pub use error::{CoreError, Result};
pub use lexicon::Lexicon;
pub use segmenter::{Boundaries, Segmenter, SegmenterOptions};
pub use sentence::{
    SentenceSource, SentenceSpan, TerminatorSplitter, WholeText, DEFAULT_TERMINATORS,
};
pub use token::Token;
pub use tokenizer::{Identity, OffsetCorrector, SentenceTokenizer, TokenizerState};
