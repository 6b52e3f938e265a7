//! Orchestration layer for dictionary-based word segmentation
//!
//! `lexto-core` is pure logic; this crate supplies what a running system
//! needs around it: loading word lists, TOML configuration, input handling
//! and sequential or parallel batch execution over a shared lexicon.
//!
//! # Example
//!
//! ```rust
//! use lexto_engine::{Lexicon, WordProcessor};
//!
//! let processor = WordProcessor::new(Lexicon::from_words(["ข้าว", "สาร", "ข้าวสาร", "ใน"]))?;
//! let words = processor.segment_words("ข้าวสารในข้าว")?;
//! assert_eq!(words, ["ข้าวสาร", "ใน", "ข้าว"]);
//! # Ok::<(), lexto_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod loader;
pub mod processor;

// Re-export key types
pub use config::{ConfigBuilder, EngineConfig, SplitterKind};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::{Document, Input};
pub use loader::{LexiconLoader, LoaderOptions};
pub use processor::{DocumentSentences, DocumentTokenizer, WordProcessor, WordProcessorBuilder};

// Re-export from core for convenience
pub use lexto_core::{Lexicon, SegmenterOptions, SentenceSpan, Token};
