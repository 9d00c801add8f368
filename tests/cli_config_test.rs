//! Integration tests for loading configurations from disk and running CLI commands

use std::fs;

use clap::Parser;
use spanfeat::cli::args::{Command, SpanfeatArgs, TokenizerKind};
use spanfeat::cli::commands::{execute_command, extract_text};
use spanfeat::config::ExtractorConfig;
use spanfeat::error::{Result, SpanfeatError};
use tempfile::TempDir;

const CONFIG: &str = r#"{
    "annotation_type": "token",
    "extractor": { "type": "lowercase_text" },
    "contexts": [
        { "type": "preceding", "end": 1 },
        { "type": "count", "contexts": [{ "type": "following", "end": 3 }] }
    ]
}"#;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("features.json");
    fs::write(&path, CONFIG)?;

    let extractor = ExtractorConfig::from_path(&path)?.build()?;
    assert_eq!(extractor.feature_name(), Some("lower"));
    assert_eq!(extractor.contexts().len(), 2);
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ExtractorConfig::from_path(temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(SpanfeatError::Io(_))));
}

#[test]
fn test_extract_command_over_file_input() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("features.json");
    let input_path = temp_dir.path().join("input.txt");
    fs::write(&config_path, CONFIG)?;
    fs::write(&input_path, "The cat sat.\nThe cat ran.\n")?;

    let config_arg = config_path.to_string_lossy().to_string();
    let input_arg = input_path.to_string_lossy().to_string();
    let args = SpanfeatArgs::parse_from([
        "spanfeat",
        "-q",
        "-f",
        "json",
        "extract",
        "--config",
        config_arg.as_str(),
        "--tokenizer",
        "regex",
        "--within-line",
        input_arg.as_str(),
    ]);

    let Command::Extract(extract_args) = &args.command else {
        panic!("Expected extract command");
    };
    assert_eq!(extract_args.tokenizer, TokenizerKind::Regex);

    let extractor = ExtractorConfig::from_path(&extract_args.config)?.build()?;
    let text = fs::read_to_string(&input_path)?;
    let results = extract_text(&extractor, &text, extract_args)?;

    assert_eq!(results.len(), 8);
    let second_line_start = &results[4];
    assert_eq!(second_line_start.text, "The");
    let rendered: Vec<String> = second_line_start
        .features
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        vec![
            "Preceding_0_1_0_lower=OOB1",
            "Count_Following_0_3_lower_cat=1",
            "Count_Following_0_3_lower_ran=1",
            "Count_Following_0_3_lower_.=1",
        ]
    );

    execute_command(args)?;
    Ok(())
}

#[test]
fn test_check_command_rejects_invalid_config() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{ "contexts": [{ "type": "ngrams", "n": 0, "contexts": [{ "type": "focus" }] }] }"#,
    )?;

    let path_arg = path.to_string_lossy().to_string();
    let args = SpanfeatArgs::parse_from(["spanfeat", "-q", "check", path_arg.as_str()]);

    assert!(matches!(
        execute_command(args),
        Err(SpanfeatError::InvalidConfig(_))
    ));
    Ok(())
}
