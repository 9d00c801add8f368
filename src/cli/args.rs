//! Command line argument parsing for the spanfeat CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// spanfeat - contextual feature extraction over annotated text
#[derive(Parser, Debug, Clone)]
#[command(name = "spanfeat")]
#[command(about = "Extract contextual features around the tokens of a text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpanfeatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpanfeatArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract features for every token of a text
    Extract(ExtractArgs),

    /// Validate an extractor configuration
    Check(CheckArgs),
}

/// Arguments for feature extraction
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Extractor configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Input text file (reads stdin when omitted)
    #[arg(value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Tokenizer used to build token annotations
    #[arg(short, long, default_value = "whitespace")]
    pub tokenizer: TokenizerKind,

    /// Restrict every context to the line containing the focus token
    #[arg(long)]
    pub within_line: bool,

    /// Extract over the gap between consecutive tokens instead of at each token
    #[arg(long, conflicts_with = "within_line")]
    pub between: bool,
}

/// Arguments for configuration checks
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Extractor configuration file (JSON)
    #[arg(value_name = "CONFIG_FILE")]
    pub config: PathBuf,
}

/// Tokenizers available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Split on whitespace
    Whitespace,
    /// Word characters and single punctuation marks
    Regex,
    /// Unicode word boundaries
    Unicode,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// One JSON record per line
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract() {
        let args = SpanfeatArgs::parse_from([
            "spanfeat",
            "-f",
            "json",
            "extract",
            "--config",
            "features.json",
            "--tokenizer",
            "regex",
            "input.txt",
        ]);

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Extract(extract) => {
                assert_eq!(extract.config, PathBuf::from("features.json"));
                assert_eq!(extract.input, Some(PathBuf::from("input.txt")));
                assert_eq!(extract.tokenizer, TokenizerKind::Regex);
                assert!(!extract.between);
            }
            _ => panic!("Expected extract command"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = SpanfeatArgs::parse_from(["spanfeat", "-vv", "check", "features.json"]);
        assert_eq!(args.verbosity(), 3);

        let args = SpanfeatArgs::parse_from(["spanfeat", "-q", "-v", "check", "features.json"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_between_conflicts_with_within_line() {
        let result = SpanfeatArgs::try_parse_from([
            "spanfeat",
            "extract",
            "--config",
            "features.json",
            "--between",
            "--within-line",
        ]);
        assert!(result.is_err());
    }
}
