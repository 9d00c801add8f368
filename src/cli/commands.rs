//! Command implementations for the spanfeat CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use log::{debug, info};

use crate::analysis::tokenizer::{
    RegexTokenizer, TOKEN_TYPE, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ExtractorConfig;
use crate::contextual::ContextualExtractor;
use crate::document::{Annotation, Document};
use crate::error::{Result, SpanfeatError};
use crate::feature::Feature;

/// Annotation type of the line segments built from the input text.
pub const LINE_TYPE: &str = "line";

/// Process exit status for a failed command.
///
/// Configuration problems exit with 2, every other failure with 1.
pub fn exit_code(error: &SpanfeatError) -> i32 {
    match error {
        SpanfeatError::InvalidConfig(_) | SpanfeatError::Json(_) => 2,
        _ => 1,
    }
}

/// Execute a CLI command.
pub fn execute_command(args: SpanfeatArgs) -> Result<()> {
    match &args.command {
        Command::Extract(extract_args) => extract(extract_args, &args),
        Command::Check(check_args) => check(check_args, &args),
    }
}

/// Extract features for the tokens of the input text.
fn extract(args: &ExtractArgs, cli_args: &SpanfeatArgs) -> Result<()> {
    let extractor = ExtractorConfig::from_path(&args.config)?.build()?;

    let text = match &args.input {
        Some(path) => {
            info!("reading input from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            info!("reading input from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let start = Instant::now();
    let results = extract_text(&extractor, &text, args)?;
    info!(
        "extracted features for {} foci in {}ms",
        results.len(),
        start.elapsed().as_millis()
    );

    output_results("Extracted features:", &results, cli_args)
}

/// Validate a configuration and print the contexts it describes.
fn check(args: &CheckArgs, cli_args: &SpanfeatArgs) -> Result<()> {
    let extractor = ExtractorConfig::from_path(&args.config)?.build()?;

    let result = CheckResult {
        annotation_type: extractor.annotation_type().to_string(),
        feature_name: extractor.feature_name().map(str::to_string),
        contexts: extractor.contexts().iter().map(|c| c.name()).collect(),
    };

    output_results("Configuration is valid.", &[result], cli_args)
}

/// Build a document from `text` and extract features the way `args` asks.
///
/// Tokens are the foci. Lines are added as a `line` layer so that contexts
/// can search them and `--within-line` can bound extraction by them.
pub fn extract_text(
    extractor: &ContextualExtractor,
    text: &str,
    args: &ExtractArgs,
) -> Result<Vec<FocusFeatures>> {
    let tokenizer = build_tokenizer(args.tokenizer)?;
    let document = Document::builder(text)
        .tokenize(tokenizer.as_ref())?
        .segment(LINE_TYPE, &RegexTokenizer::with_gaps(r"\n+")?)?
        .build()?;

    let tokens = document.annotations(TOKEN_TYPE);
    debug!(
        "document with {} tokens and {} lines",
        tokens.len(),
        document.annotations(LINE_TYPE).len()
    );

    if args.between {
        return tokens
            .windows(2)
            .map(|pair| {
                let features = extractor.extract_between(&document, &pair[0], &pair[1])?;
                Ok(focus_features(
                    &document,
                    pair[0].end(),
                    pair[1].begin(),
                    features,
                ))
            })
            .collect();
    }

    let extracted = if args.within_line {
        tokens
            .iter()
            .map(|token| match containing_line(&document, token) {
                Some(line) => extractor.extract_within(&document, token, line),
                None => extractor.extract(&document, token),
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        extractor.extract_all(&document, tokens)?
    };

    Ok(tokens
        .iter()
        .zip(extracted)
        .map(|(token, features)| focus_features(&document, token.begin(), token.end(), features))
        .collect())
}

fn build_tokenizer(kind: TokenizerKind) -> Result<Box<dyn Tokenizer>> {
    Ok(match kind {
        TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer::new()),
        TokenizerKind::Regex => Box::new(RegexTokenizer::new()?),
        TokenizerKind::Unicode => Box::new(UnicodeWordTokenizer::new().keep_punctuation(true)),
    })
}

fn containing_line<'a>(document: &'a Document, token: &Annotation) -> Option<&'a Annotation> {
    document
        .annotations(LINE_TYPE)
        .iter()
        .find(|line| line.span().contains(token.span()))
}

fn focus_features(
    document: &Document,
    begin: usize,
    end: usize,
    features: Vec<Feature>,
) -> FocusFeatures {
    FocusFeatures {
        begin,
        end,
        text: document.text()[begin..end].to_string(),
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::extractor::BaseExtractor;
    use crate::extractor::text::CoveredTextExtractor;

    fn extract_args(tokenizer: TokenizerKind, within_line: bool, between: bool) -> ExtractArgs {
        ExtractArgs {
            config: "unused.json".into(),
            input: None,
            tokenizer,
            within_line,
            between,
        }
    }

    fn preceding_extractor() -> ContextualExtractor {
        ContextualExtractor::new(
            "token",
            BaseExtractor::unnamed(CoveredTextExtractor::new()),
            vec![Context::preceding(1)],
        )
        .unwrap()
    }

    fn rendered(result: &FocusFeatures) -> Vec<String> {
        result.features.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_extract_text_per_token() {
        let results = extract_text(
            &preceding_extractor(),
            "The man walked",
            &extract_args(TokenizerKind::Whitespace, false, false),
        )
        .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].text, "The");
        assert_eq!(rendered(&results[0]), vec!["Preceding_0_1_0=OOB1"]);
        assert_eq!(rendered(&results[2]), vec!["Preceding_0_1_0=man"]);
    }

    #[test]
    fn test_extract_text_within_line() {
        let text = "one two\nthree four";
        let unbounded = extract_text(
            &preceding_extractor(),
            text,
            &extract_args(TokenizerKind::Whitespace, false, false),
        )
        .unwrap();
        let bounded = extract_text(
            &preceding_extractor(),
            text,
            &extract_args(TokenizerKind::Whitespace, true, false),
        )
        .unwrap();

        assert_eq!(rendered(&unbounded[2]), vec!["Preceding_0_1_0=two"]);
        assert_eq!(rendered(&bounded[2]), vec!["Preceding_0_1_0=OOB1"]);
        assert_eq!(rendered(&bounded[3]), vec!["Preceding_0_1_0=three"]);
    }

    #[test]
    fn test_extract_text_between() {
        let results = extract_text(
            &preceding_extractor(),
            "a b  c",
            &extract_args(TokenizerKind::Whitespace, false, true),
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!((results[0].begin, results[0].end), (1, 2));
        assert_eq!(results[1].text, "  ");
        assert_eq!(rendered(&results[1]), vec!["Preceding_0_1_0=b"]);
    }

    #[test]
    fn test_regex_tokenizer_splits_punctuation() {
        let results = extract_text(
            &preceding_extractor(),
            "Stop.",
            &extract_args(TokenizerKind::Regex, false, false),
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(rendered(&results[1]), vec!["Preceding_0_1_0=Stop"]);
    }

    #[test]
    fn test_exit_code_separates_config_errors() {
        assert_eq!(exit_code(&SpanfeatError::invalid_config("end 0 < begin 2")), 2);
        let malformed = serde_json::from_str::<ExtractorConfig>("{").unwrap_err();
        assert_eq!(exit_code(&SpanfeatError::from(malformed)), 2);
        assert_eq!(exit_code(&SpanfeatError::extraction("lexicon unavailable")), 1);
        assert_eq!(
            exit_code(&SpanfeatError::from(io::Error::new(io::ErrorKind::NotFound, "input.txt"))),
            1
        );
    }
}
