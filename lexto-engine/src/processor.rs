//! Word processor and builder
//!
//! [`WordProcessor`] is the entry point of the engine: it owns the shared
//! lexicon, picks the sentence source named by the configuration and runs
//! single documents or whole batches through [`SentenceTokenizer`]s.

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;
use crate::{
    config::{ConfigBuilder, EngineConfig, SplitterKind},
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    input::Input,
    loader::{LexiconLoader, LoaderOptions},
};
use lexto_core::{
    Lexicon, Segmenter, SentenceSpan, SentenceTokenizer, TerminatorSplitter, Token, WholeText,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace};

/// Sentence source selected by [`SentenceConfig`](crate::config::SentenceConfig)
#[derive(Debug, Clone)]
pub enum DocumentSentences<'a> {
    /// Terminator-based splitting
    Terminator(TerminatorSplitter<'a>),
    /// Whole document as one sentence
    Whole(WholeText),
}

impl Iterator for DocumentSentences<'_> {
    type Item = SentenceSpan;

    fn next(&mut self) -> Option<SentenceSpan> {
        match self {
            DocumentSentences::Terminator(splitter) => splitter.next(),
            DocumentSentences::Whole(whole) => whole.next(),
        }
    }
}

/// Tokenizer type handed out by [`WordProcessor::tokenizer`]
pub type DocumentTokenizer<'a> = SentenceTokenizer<'a, DocumentSentences<'a>>;

/// Main word processor
///
/// Cheap to share across threads: the lexicon sits behind an `Arc` and is
/// never mutated.
#[derive(Debug)]
pub struct WordProcessor {
    lexicon: Arc<Lexicon>,
    segmenter: Segmenter,
    config: EngineConfig,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

impl WordProcessor {
    /// Create a processor over `lexicon` with default configuration
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        Self::with_lexicon(Arc::new(lexicon), EngineConfig::default())
    }

    /// Create a processor that loads the dictionary named by `config`
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let path = config.dictionary.path.as_ref().ok_or_else(|| {
            EngineError::ConfigError("dictionary.path must be set to load a lexicon".into())
        })?;

        let loader = LexiconLoader::with_options(LoaderOptions {
            allow_comments: config.dictionary.allow_comments,
        });
        let lexicon = loader.load_path(path)?;
        Self::with_lexicon(Arc::new(lexicon), config)
    }

    /// Create a processor sharing an already loaded lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if lexicon.is_empty() {
            return Err(EngineError::EmptyLexicon);
        }

        let segmenter = Segmenter::with_options(Arc::clone(&lexicon), config.segmenter_options());
        debug!(
            words = lexicon.len(),
            splitter = ?config.sentences.splitter,
            atomic_runs = config.segmentation.atomic_runs,
            "created word processor"
        );

        Ok(Self {
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::new(config.performance.threads)?,
            lexicon,
            segmenter,
            config,
        })
    }

    /// Create a processor builder
    pub fn builder() -> WordProcessorBuilder {
        WordProcessorBuilder::new()
    }

    /// The shared lexicon
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// The configuration in effect
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sentence spans of `text` according to the configured splitter
    pub fn sentences<'a>(&self, text: &'a str) -> DocumentSentences<'a> {
        match self.config.sentences.splitter {
            SplitterKind::Terminator => DocumentSentences::Terminator(
                TerminatorSplitter::with_terminators(
                    text,
                    self.config.sentences.terminators.iter().copied(),
                ),
            ),
            SplitterKind::Whole => DocumentSentences::Whole(WholeText::new(text)),
        }
    }

    /// Lazy token stream over `text`
    pub fn tokenizer<'a>(&self, text: &'a str) -> DocumentTokenizer<'a> {
        SentenceTokenizer::new(text, self.sentences(text), self.segmenter.clone())
    }

    /// Tokenize any input
    ///
    /// Offsets index the raw source, so a stripped byte order mark shifts
    /// them by its length.
    pub fn tokenize(&self, input: Input) -> Result<Vec<Token>> {
        let document = input.into_document()?;
        let tokens = self
            .tokenizer(&document.text)
            .with_base_offset(document.base_offset)
            .collect::<lexto_core::Result<Vec<_>>>()?;
        trace!(
            origin = %document.origin,
            bytes = document.text.len(),
            tokens = tokens.len(),
            "tokenized document"
        );
        Ok(tokens)
    }

    /// Tokenize a string
    pub fn tokenize_text(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self
            .tokenizer(text)
            .collect::<lexto_core::Result<Vec<_>>>()?;
        trace!(bytes = text.len(), tokens = tokens.len(), "tokenized text");
        Ok(tokens)
    }

    /// Word texts of a string, in order
    pub fn segment_words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenize_text(text)?
            .into_iter()
            .map(|token| token.text)
            .collect())
    }

    /// Tokenize independent documents, choosing the execution mode from the
    /// batch size
    pub fn tokenize_batch(&self, texts: &[&str]) -> Result<Vec<Vec<Token>>> {
        let mode = auto_select(texts.len(), self.config.performance.parallel_threshold);
        self.tokenize_batch_with_mode(texts, mode)
    }

    /// Tokenize independent documents with a specific execution mode
    ///
    /// Without the `parallel` feature every mode runs sequentially.
    pub fn tokenize_batch_with_mode(
        &self,
        texts: &[&str],
        mode: ExecutionMode,
    ) -> Result<Vec<Vec<Token>>> {
        debug!(documents = texts.len(), ?mode, "tokenizing batch");
        let tokenize = |text: &&str| self.tokenize_text(text);

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel.execute(texts, tokenize),
            _ => SequentialExecutor.execute(texts, tokenize),
        }
    }
}

/// Builder for [`WordProcessor`]
#[derive(Debug, Default)]
pub struct WordProcessorBuilder {
    lexicon: Option<Arc<Lexicon>>,
    config_builder: ConfigBuilder,
}

impl WordProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an in-memory lexicon instead of loading one
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(Arc::new(lexicon));
        self
    }

    /// Share a lexicon with other processors
    pub fn shared_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config_builder = ConfigBuilder::from_config(config);
        self
    }

    /// Load the lexicon from this word list
    pub fn dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_builder = self.config_builder.dictionary_path(path);
        self
    }

    /// Skip `#` comment lines in the word list
    pub fn allow_comments(mut self, allow: bool) -> Self {
        self.config_builder = self.config_builder.allow_comments(allow);
        self
    }

    /// Keep digit, Latin and whitespace runs whole
    pub fn atomic_runs(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.atomic_runs(enabled);
        self
    }

    /// Set the sentence splitter
    pub fn splitter(mut self, kind: SplitterKind) -> Self {
        self.config_builder = self.config_builder.splitter(kind);
        self
    }

    /// Set the sentence terminators
    pub fn terminators(mut self, terminators: impl IntoIterator<Item = char>) -> Self {
        self.config_builder = self.config_builder.terminators(terminators);
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config_builder = self.config_builder.threads(count);
        self
    }

    /// Set the batch size at which tokenization goes parallel
    pub fn parallel_threshold(mut self, documents: usize) -> Self {
        self.config_builder = self.config_builder.parallel_threshold(documents);
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<WordProcessor> {
        let config = self.config_builder.build()?;
        match self.lexicon {
            Some(lexicon) => WordProcessor::with_lexicon(lexicon, config),
            None => WordProcessor::with_config(config),
        }
    }
}
