//! Known-word set used to recognize word boundaries

use std::collections::HashSet;
use std::fmt;

/// Immutable set of known words
///
/// Entries are matched exactly: no case folding or whitespace trimming is
/// applied. Once built, a lexicon is only ever read, so a single instance can
/// be shared behind an `Arc` by any number of concurrent tokenizers.
#[derive(Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    /// Longest entry, in characters
    max_word_chars: usize,
}

impl Lexicon {
    /// Build a lexicon from a sequence of words
    ///
    /// Duplicates collapse into one entry. Empty strings are skipped since
    /// they cannot delimit a word.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words_set = HashSet::new();
        let mut max_word_chars = 0;

        for word in words {
            let word = word.into();
            if word.is_empty() {
                continue;
            }
            max_word_chars = max_word_chars.max(word.chars().count());
            words_set.insert(word);
        }

        Self {
            words: words_set,
            max_word_chars,
        }
    }

    /// Create a lexicon with no entries
    ///
    /// Every sentence segmented against it degrades to single characters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether `word` is a known entry
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest entry in characters
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("len", &self.words.len())
            .field("max_word_chars", &self.max_word_chars)
            .finish()
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
