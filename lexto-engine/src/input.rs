//! Documents to tokenize
//!
//! Every input is decoded into one UTF-8 [`Document`]. A leading byte order
//! mark is removed before segmentation, and the document remembers how many
//! bytes it dropped so token offsets still point into the raw source.

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// U+FEFF, tolerated at the start of documents and word lists
pub(crate) const BYTE_ORDER_MARK: char = '\u{feff}';

/// `text` without a leading byte order mark
pub(crate) fn strip_byte_order_mark(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

/// Source of one document
pub enum Input {
    /// In-memory text
    Text(String),
    /// UTF-8 file
    File(PathBuf),
    /// Raw UTF-8 bytes
    Bytes(Vec<u8>),
    /// Stream read to the end (stdin, sockets, ...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.write_str("Reader"),
        }
    }
}

/// Decoded document ready for tokenization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Text handed to the tokenizer
    pub text: String,
    /// Where the text came from, for error and log messages
    pub origin: String,
    /// Bytes removed from the front of the source (a byte order mark)
    pub base_offset: usize,
}

impl Document {
    fn decode(text: String, origin: String) -> Self {
        let stripped = text.len() - strip_byte_order_mark(&text).len();
        let text = if stripped == 0 {
            text
        } else {
            text[stripped..].to_string()
        };
        Self {
            text,
            origin,
            base_offset: stripped,
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Label used in errors and logs
    pub fn origin(&self) -> String {
        match self {
            Input::Text(_) => "<text>".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Bytes(_) => "<bytes>".to_string(),
            Input::Reader(_) => "<reader>".to_string(),
        }
    }

    /// Read and decode the document
    ///
    /// Read failures carry the origin; bytes that are not UTF-8 report the
    /// offset of the first invalid sequence.
    pub fn into_document(self) -> Result<Document> {
        let origin = self.origin();
        let bytes = match self {
            Input::Text(text) => return Ok(Document::decode(text, origin)),
            Input::File(path) => fs::read(&path).map_err(|source| EngineError::Read {
                origin: origin.clone(),
                source,
            })?,
            Input::Bytes(bytes) => bytes,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|source| EngineError::Read {
                        origin: origin.clone(),
                        source,
                    })?;
                buffer
            }
        };

        let text = String::from_utf8(bytes).map_err(|e| {
            EngineError::EncodingError(format!(
                "{origin}: invalid UTF-8 at byte {}",
                e.utf8_error().valid_up_to()
            ))
        })?;
        Ok(Document::decode(text, origin))
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
