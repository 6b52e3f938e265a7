//! Sentence-driven tokenizer
//!
//! Bridges a [`SentenceSource`] and the [`Segmenter`]. Each pull either emits
//! the next word of the current sentence or, once the sentence is used up,
//! asks the source for another span:
//!
//! ```text
//! AwaitingSentence -> WithinSentence -> AwaitingSentence -> ... -> Exhausted
//! ```

use crate::{
    error::{CoreError, Result},
    segmenter::{Boundaries, Segmenter},
    sentence::{SentenceSource, SentenceSpan},
    token::Token,
};
use std::iter::FusedIterator;

/// Maps buffer offsets back to offsets in the original input
///
/// Only needed when the buffer was itself derived from a differently encoded
/// or filtered source. Closures `Fn(usize) -> usize` implement it directly.
pub trait OffsetCorrector {
    /// Corrected offset for `offset`
    fn correct(&self, offset: usize) -> usize;
}

/// Leaves offsets unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl OffsetCorrector for Identity {
    #[inline]
    fn correct(&self, offset: usize) -> usize {
        offset
    }
}

impl<F> OffsetCorrector for F
where
    F: Fn(usize) -> usize,
{
    fn correct(&self, offset: usize) -> usize {
        self(offset)
    }
}

/// Phase of a [`SentenceTokenizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerState {
    /// No sentence loaded; the next pull requests a span
    AwaitingSentence,
    /// Emitting words of the current sentence
    WithinSentence {
        /// Sentence-relative byte offset where the next word starts
        position: usize,
    },
    /// Source drained or a contract violation occurred
    Exhausted,
}

/// Lazy, non-restartable stream of word tokens over one buffer
///
/// Token offsets are `base_offset + sentence start + word offset`, passed
/// through the offset corrector. Iterating yields `Result<Token>`: a
/// malformed span from the source is reported once and ends the stream.
pub struct SentenceTokenizer<'a, S, C = Identity> {
    buffer: &'a str,
    source: S,
    segmenter: Segmenter,
    corrector: C,
    base_offset: usize,
    state: TokenizerState,
    sentence: String,
    sentence_start: usize,
    previous_end: usize,
    boundaries: Boundaries,
    cursor: usize,
}

impl<'a, S: SentenceSource> SentenceTokenizer<'a, S, Identity> {
    /// Create a tokenizer over `buffer` fed by `source`
    pub fn new(buffer: &'a str, source: S, segmenter: Segmenter) -> Self {
        Self {
            buffer,
            source,
            segmenter,
            corrector: Identity,
            base_offset: 0,
            state: TokenizerState::AwaitingSentence,
            sentence: String::new(),
            sentence_start: 0,
            previous_end: 0,
            boundaries: Boundaries::default(),
            cursor: 0,
        }
    }
}

impl<'a, S: SentenceSource, C: OffsetCorrector> SentenceTokenizer<'a, S, C> {
    /// Shift every emitted offset by `offset`
    ///
    /// Used when `buffer` is a window into a larger stream.
    pub fn with_base_offset(mut self, offset: usize) -> Self {
        self.base_offset = offset;
        self
    }

    /// Replace the offset corrector
    pub fn with_offset_corrector<D: OffsetCorrector>(
        self,
        corrector: D,
    ) -> SentenceTokenizer<'a, S, D> {
        SentenceTokenizer {
            buffer: self.buffer,
            source: self.source,
            segmenter: self.segmenter,
            corrector,
            base_offset: self.base_offset,
            state: self.state,
            sentence: self.sentence,
            sentence_start: self.sentence_start,
            previous_end: self.previous_end,
            boundaries: self.boundaries,
            cursor: self.cursor,
        }
    }

    /// Current phase
    pub fn state(&self) -> TokenizerState {
        self.state
    }

    /// The segmenter in use
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Pull the next token
    ///
    /// Returns `Ok(None)` at end of stream, and keeps returning it.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            match self.state {
                TokenizerState::Exhausted => return Ok(None),
                TokenizerState::AwaitingSentence => {
                    let Some(span) = self.source.next_span() else {
                        self.state = TokenizerState::Exhausted;
                        return Ok(None);
                    };
                    if let Err(err) = self.set_next_sentence(span) {
                        self.state = TokenizerState::Exhausted;
                        return Err(err);
                    }
                }
                TokenizerState::WithinSentence { position } => {
                    if let Some(token) = self.increment_word(position) {
                        return Ok(Some(token));
                    }
                    self.state = TokenizerState::AwaitingSentence;
                }
            }
        }
    }

    fn set_next_sentence(&mut self, span: SentenceSpan) -> Result<()> {
        span.validate(self.buffer)?;
        if span.start < self.previous_end {
            return Err(CoreError::OverlappingSpan {
                start: span.start,
                previous_end: self.previous_end,
            });
        }

        self.sentence.clear();
        self.sentence.push_str(&self.buffer[span.start..span.end]);
        self.sentence_start = span.start;
        self.previous_end = span.end;
        self.boundaries = self.segmenter.segment(&self.sentence);
        // Boundary 0 is the start of the first word
        self.cursor = 1;
        self.state = TokenizerState::WithinSentence { position: 0 };
        Ok(())
    }

    fn increment_word(&mut self, position: usize) -> Option<Token> {
        let end = *self.boundaries.as_slice().get(self.cursor)?;
        self.cursor += 1;
        self.state = TokenizerState::WithinSentence { position: end };

        let origin = self.base_offset + self.sentence_start;
        Some(Token::new(
            &self.sentence[position..end],
            self.corrector.correct(origin + position),
            self.corrector.correct(origin + end),
        ))
    }
}

impl<S: SentenceSource, C: OffsetCorrector> Iterator for SentenceTokenizer<'_, S, C> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<S: SentenceSource, C: OffsetCorrector> FusedIterator for SentenceTokenizer<'_, S, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexicon::Lexicon, sentence::WholeText};
    use std::sync::Arc;

    fn segmenter(words: &[&str]) -> Segmenter {
        Segmenter::new(Arc::new(Lexicon::from_words(words.iter().copied())))
    }

    fn spans(pairs: &[(usize, usize)]) -> std::vec::IntoIter<SentenceSpan> {
        pairs
            .iter()
            .map(|&pair| SentenceSpan::from(pair))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn collect<S: SentenceSource, C: OffsetCorrector>(
        tokenizer: SentenceTokenizer<'_, S, C>,
    ) -> Vec<Token> {
        tokenizer.collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_offsets_are_buffer_absolute() {
        let tokenizer =
            SentenceTokenizer::new("abcd", spans(&[(0, 2), (2, 4)]), segmenter(&["ab", "cd"]));
        assert_eq!(
            collect(tokenizer),
            vec![Token::new("ab", 0, 2), Token::new("cd", 2, 4)]
        );
    }

    #[test]
    fn test_empty_buffer() {
        let tokenizer = SentenceTokenizer::new("", WholeText::new(""), segmenter(&["a"]));
        assert!(collect(tokenizer).is_empty());
    }

    #[test]
    fn test_empty_sentence_skipped() {
        let tokenizer = SentenceTokenizer::new(
            "abc",
            spans(&[(0, 1), (1, 1), (1, 3)]),
            segmenter(&["bc"]),
        );
        assert_eq!(
            collect(tokenizer),
            vec![Token::new("a", 0, 1), Token::new("bc", 1, 3)]
        );
    }

    #[test]
    fn test_state_transitions() {
        let mut tokenizer =
            SentenceTokenizer::new("abc", WholeText::new("abc"), segmenter(&["ab"]));
        assert_eq!(tokenizer.state(), TokenizerState::AwaitingSentence);

        assert_eq!(tokenizer.next_token().unwrap(), Some(Token::new("ab", 0, 2)));
        assert_eq!(
            tokenizer.state(),
            TokenizerState::WithinSentence { position: 2 }
        );

        assert_eq!(tokenizer.next_token().unwrap(), Some(Token::new("c", 2, 3)));
        assert_eq!(
            tokenizer.state(),
            TokenizerState::WithinSentence { position: 3 }
        );

        assert_eq!(tokenizer.next_token().unwrap(), None);
        assert_eq!(tokenizer.state(), TokenizerState::Exhausted);
        assert_eq!(tokenizer.next_token().unwrap(), None);
    }

    #[test]
    fn test_invalid_span_surfaces_and_stops() {
        let mut tokenizer =
            SentenceTokenizer::new("abc", spans(&[(0, 1), (2, 9), (0, 3)]), segmenter(&[]));
        assert_eq!(tokenizer.next().unwrap().unwrap(), Token::new("a", 0, 1));
        assert_eq!(
            tokenizer.next().unwrap(),
            Err(CoreError::InvalidSpan {
                start: 2,
                end: 9,
                len: 3
            })
        );
        assert_eq!(tokenizer.state(), TokenizerState::Exhausted);
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_overlapping_span_rejected() {
        let mut tokenizer =
            SentenceTokenizer::new("abcd", spans(&[(0, 3), (2, 4)]), segmenter(&["abc"]));
        assert_eq!(tokenizer.next().unwrap().unwrap(), Token::new("abc", 0, 3));
        assert_eq!(
            tokenizer.next().unwrap(),
            Err(CoreError::OverlappingSpan {
                start: 2,
                previous_end: 3
            })
        );
    }

    #[test]
    fn test_base_offset_and_corrector() {
        let tokenizer =
            SentenceTokenizer::new("abcd", spans(&[(0, 2), (2, 4)]), segmenter(&["ab", "cd"]))
                .with_base_offset(100)
                .with_offset_corrector(|offset: usize| offset * 2);
        assert_eq!(
            collect(tokenizer),
            vec![Token::new("ab", 200, 204), Token::new("cd", 204, 208)]
        );
    }

    #[test]
    fn test_multibyte_offsets() {
        let text = "ข้าวสาร";
        let tokenizer =
            SentenceTokenizer::new(text, WholeText::new(text), segmenter(&["ข้าว", "สาร"]));
        let tokens = collect(tokenizer);
        assert_eq!(
            tokens,
            vec![Token::new("ข้าว", 0, 12), Token::new("สาร", 12, 21)]
        );
        for token in &tokens {
            assert_eq!(&text[token.range()], token.text);
        }
    }
}
