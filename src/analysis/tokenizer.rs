//! Tokenizer implementations for building token annotations.
//!
//! Tokenizers break text into spans and return them as `token` annotations,
//! tagged with a coarse `type` attribute (alphanum, num, punct, ...).
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//!
//! # Examples
//!
//! ```
//! use spanfeat::analysis::tokenizer::Tokenizer;
//! use spanfeat::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello world").unwrap();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].begin(), 6);
//! ```

use crate::document::annotation::Annotation;
use crate::error::Result;
use crate::span::Span;

/// Annotation type given to tokenizer output.
pub const TOKEN_TYPE: &str = "token";

/// Attribute holding the [`TokenType`] of a token.
pub const TYPE_ATTRIBUTE: &str = "type";

/// Trait for tokenizers that convert text into token annotations.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the text into `token` annotations in document order.
    fn tokenize(&self, text: &str) -> Result<Vec<Annotation>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Coarse classification of token content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Alphanumeric text
    Alphanum,
    /// Numeric values
    Num,
    /// CJK (Chinese, Japanese, Korean) characters
    Cjk,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a word by its characters.
    pub fn detect(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
                '\u{3040}'..='\u{30FF}' |  // Hiragana and Katakana
                '\u{AC00}'..='\u{D7AF}'    // Hangul syllables
            )
        }) {
            return TokenType::Cjk;
        }

        if word.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Alphanum => "alphanum",
            TokenType::Num => "num",
            TokenType::Cjk => "cjk",
            TokenType::Punctuation => "punct",
            TokenType::Other => "other",
        }
    }
}

/// Build a token annotation for `text[begin..end]`, tagged with its type.
pub(crate) fn token(text: &str, begin: usize, end: usize) -> Result<Annotation> {
    let token_type = TokenType::detect(&text[begin..end]);
    Ok(Annotation::new(TOKEN_TYPE, Span::new(begin, end)?)
        .with_attribute(TYPE_ATTRIBUTE, token_type.as_str()))
}

// Individual tokenizer modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;

pub use self::regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
