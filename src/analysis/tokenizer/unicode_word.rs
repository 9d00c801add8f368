//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Segments without any alphanumeric character (whitespace,
//! most punctuation) are dropped unless punctuation is kept explicitly.
//!
//! # Examples
//!
//! ```
//! use spanfeat::analysis::tokenizer::Tokenizer;
//! use spanfeat::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokens = UnicodeWordTokenizer::new().tokenize("Hello, world!").unwrap();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].begin(), 7);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::{Tokenizer, token};
use crate::document::annotation::Annotation;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer {
    keep_punctuation: bool,
}

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer::default()
    }

    /// Keep punctuation segments as tokens of their own.
    pub fn keep_punctuation(mut self, keep: bool) -> Self {
        self.keep_punctuation = keep;
        self
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Annotation>> {
        text.split_word_bound_indices()
            .filter(|(_, segment)| {
                segment.chars().any(char::is_alphanumeric)
                    || (self.keep_punctuation && !segment.trim().is_empty())
            })
            .map(|(begin, segment)| token(text, begin, begin + segment.len()))
            .collect()
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
