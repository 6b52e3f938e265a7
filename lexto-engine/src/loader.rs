//! Word list loading
//!
//! A word list is plain UTF-8 text with one entry per line. Entries are kept
//! verbatim apart from the line terminator and a leading byte order mark, so
//! words that start or end with spaces survive loading.

use crate::{
    error::{EngineError, Result},
    input::strip_byte_order_mark,
};
use lexto_core::Lexicon;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Word list parsing options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Treat lines starting with `#` as comments
    pub allow_comments: bool,
}

/// Builds a [`Lexicon`] from word lists
#[derive(Debug, Clone, Default)]
pub struct LexiconLoader {
    options: LoaderOptions,
}

impl LexiconLoader {
    /// Loader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with custom options
    pub fn with_options(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> LoaderOptions {
        self.options
    }

    /// Load the word list stored at `path`
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Lexicon> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| EngineError::Dictionary {
            origin: origin.clone(),
            source,
        })?;
        self.load_lines(BufReader::new(file), &origin)
    }

    /// Load a word list from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Lexicon> {
        self.load_lines(BufReader::new(reader), "<reader>")
    }

    /// Load a word list held in memory
    pub fn load_str(&self, source: &str) -> Result<Lexicon> {
        self.load_lines(source.as_bytes(), "<string>")
    }

    /// Build a lexicon from words that are already split
    ///
    /// Comment filtering applies; no line handling is done.
    pub fn load_words<I, S>(&self, words: I) -> Result<Lexicon>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build(words.into_iter().map(Into::into), "<words>")
    }

    fn load_lines<B: BufRead>(&self, reader: B, origin: &str) -> Result<Lexicon> {
        let mut words = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let mut line = line.map_err(|source| EngineError::Dictionary {
                origin: origin.to_string(),
                source,
            })?;
            if index == 0 {
                let stripped = strip_byte_order_mark(&line);
                if stripped.len() != line.len() {
                    line = stripped.to_string();
                }
            }
            words.push(line);
        }

        self.build(words, origin)
    }

    fn build(&self, words: impl IntoIterator<Item = String>, origin: &str) -> Result<Lexicon> {
        let entries = self.entries(words);
        let count = entries.len();
        self.finish(Lexicon::from_words(entries), count, origin)
    }

    /// Candidate entries with comments and empty lines removed
    fn entries(&self, words: impl IntoIterator<Item = String>) -> Vec<String> {
        words
            .into_iter()
            .filter(|word| !word.is_empty() && !self.is_comment(word))
            .collect()
    }

    fn is_comment(&self, line: &str) -> bool {
        self.options.allow_comments && line.starts_with('#')
    }

    fn finish(&self, lexicon: Lexicon, entries: usize, origin: &str) -> Result<Lexicon> {
        if lexicon.is_empty() {
            return Err(EngineError::EmptyLexicon);
        }

        let duplicates = entries.saturating_sub(lexicon.len());
        if duplicates > 0 {
            debug!(origin, duplicates, "collapsed duplicate dictionary entries");
        }
        info!(
            origin,
            words = lexicon.len(),
            max_word_chars = lexicon.max_word_chars(),
            "loaded dictionary"
        );
        Ok(lexicon)
    }
}
