//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::{Tokenizer, token};
use crate::document::annotation::Annotation;
use crate::error::{Result, SpanfeatError};

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// With gaps enabled the text between matches becomes the tokens, which is
/// how sentence-per-line segmentation is done: `with_gaps(r"\n+")`.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern matches runs of word characters or single
    /// punctuation marks.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+|[^\w\s]")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SpanfeatError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let mut tokenizer = Self::with_pattern(pattern)?;
        tokenizer.gaps = true;
        Ok(tokenizer)
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Annotation>> {
        if !self.gaps {
            return self
                .pattern
                .find_iter(text)
                .filter(|mat| !mat.is_empty())
                .map(|mat| token(text, mat.start(), mat.end()))
                .collect();
        }

        let mut tokens = Vec::new();
        let mut last_end = 0;
        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(token(text, last_end, mat.start())?);
            }
            last_end = mat.end();
        }
        if last_end < text.len() {
            tokens.push(token(text, last_end, text.len())?);
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words<'a>(text: &'a str, tokens: &[Annotation]) -> Vec<&'a str> {
        tokens.iter().map(|t| &text[t.begin()..t.end()]).collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let text = "The man walked.";
        let tokens = RegexTokenizer::new().unwrap().tokenize(text).unwrap();

        assert_eq!(words(text, &tokens), vec!["The", "man", "walked", "."]);
        assert_eq!(tokens[2].begin(), 8);
        assert_eq!(tokens[2].end(), 14);
    }

    #[test]
    fn test_regex_tokenizer_with_gaps() {
        let text = "first line\n\nsecond line\n";
        let tokenizer = RegexTokenizer::with_gaps(r"\n+").unwrap();
        let lines = tokenizer.tokenize(text).unwrap();

        assert!(tokenizer.gaps());
        assert_eq!(words(text, &lines), vec!["first line", "second line"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            RegexTokenizer::with_pattern("("),
            Err(SpanfeatError::Analysis(_))
        ));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
