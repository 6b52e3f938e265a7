//! Segmentation engine
//!
//! Turns one sentence into an ordered list of word boundaries. Ambiguity is
//! resolved by taking the path through the word lattice with the fewest
//! words, preferring longer words earlier in the sentence on ties.

mod atomic;
mod lattice;

use crate::lexicon::Lexicon;
use smallvec::SmallVec;
use std::sync::Arc;

/// Tuning knobs for the segmenter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmenterOptions {
    /// Treat maximal runs of digits, Latin letters and whitespace as single
    /// words before dictionary matching
    pub atomic_runs: bool,
}

/// Word boundaries of one sentence
///
/// Offsets are bytes relative to the start of the sentence, always on
/// character boundaries. A non-empty list starts at `0`, ends at the sentence
/// length and is strictly increasing, so consecutive pairs partition the
/// sentence into words. An empty sentence has an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundaries {
    offsets: SmallVec<[usize; 16]>,
}

impl Boundaries {
    /// Boundary offsets in increasing order
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of boundary offsets (one more than the number of words)
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether there are no boundaries (empty sentence)
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Number of words delimited by the boundaries
    pub fn word_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// `(start, end)` byte range of each word
    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.offsets.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Dictionary-driven word segmenter
///
/// Cloning is cheap: the lexicon is shared.
#[derive(Debug, Clone)]
pub struct Segmenter {
    lexicon: Arc<Lexicon>,
    options: SegmenterOptions,
}

impl Segmenter {
    /// Create a segmenter with default options
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_options(lexicon, SegmenterOptions::default())
    }

    /// Create a segmenter with explicit options
    pub fn with_options(lexicon: Arc<Lexicon>, options: SegmenterOptions) -> Self {
        Self { lexicon, options }
    }

    /// The lexicon words are matched against
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Options in effect
    pub fn options(&self) -> SegmenterOptions {
        self.options
    }

    /// Compute the word boundaries of `sentence`
    ///
    /// Deterministic: the same sentence and lexicon always give the same
    /// boundaries.
    pub fn segment(&self, sentence: &str) -> Boundaries {
        let mut offsets = SmallVec::new();
        if sentence.is_empty() {
            return Boundaries { offsets };
        }

        offsets.push(0);
        if self.options.atomic_runs {
            for piece in atomic::split_runs(sentence) {
                if piece.atomic {
                    offsets.push(piece.end);
                } else {
                    lattice::shortest_path(
                        &self.lexicon,
                        &sentence[piece.start..piece.end],
                        piece.start,
                        &mut offsets,
                    );
                }
            }
        } else {
            lattice::shortest_path(&self.lexicon, sentence, 0, &mut offsets);
        }

        debug_assert_eq!(offsets.last().copied(), Some(sentence.len()));
        Boundaries { offsets }
    }

    /// Segment `sentence` and return the words as slices of it
    pub fn words<'s>(&self, sentence: &'s str) -> Vec<&'s str> {
        self.segment(sentence)
            .spans()
            .map(|(start, end)| &sentence[start..end])
            .collect()
    }
}
