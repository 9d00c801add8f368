//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OutputFormat, SpanfeatArgs};
use crate::error::Result;
use crate::feature::Feature;

/// Features extracted at one focus.
#[derive(Debug, Clone, Serialize)]
pub struct FocusFeatures {
    pub begin: usize,
    pub end: usize,
    pub text: String,
    pub features: Vec<Feature>,
}

/// Result of a configuration check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub annotation_type: String,
    pub feature_name: Option<String>,
    pub contexts: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for FocusFeatures {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{:?} [{}, {})", self.text, self.begin, self.end)?;
        for feature in &self.features {
            writeln!(out, "  {feature}")?;
        }
        Ok(())
    }
}

impl HumanOutput for CheckResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Annotation type: {}", self.annotation_type)?;
        writeln!(
            out,
            "Feature name: {}",
            self.feature_name.as_deref().unwrap_or("(unnamed)")
        )?;
        writeln!(out, "Contexts:")?;
        for context in &self.contexts {
            writeln!(out, "  {context}")?;
        }
        Ok(())
    }
}

/// Output a sequence of results to stdout in the requested format.
pub fn output_results<T: Serialize + HumanOutput>(
    message: &str,
    results: &[T],
    args: &SpanfeatArgs,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, message, results, args)
}

/// Write a sequence of results in the requested format.
///
/// JSON output is one record per line unless pretty printing is requested.
pub fn write_results<W: Write, T: Serialize + HumanOutput>(
    out: &mut W,
    message: &str,
    results: &[T],
    args: &SpanfeatArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            for result in results {
                result.write_human(out)?;
            }
        }
        OutputFormat::Json => {
            for result in results {
                let json = if args.pretty {
                    serde_json::to_string_pretty(result)?
                } else {
                    serde_json::to_string(result)?
                };
                writeln!(out, "{json}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
