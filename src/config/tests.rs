//! Tests for config functionality.

use crate::config::types::{default_build_files_regex, default_result_suffix};
use crate::config::{CONFIG_FILE_NAME, Config, OutputFormat};
use crate::error::LibChangeError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.build_files_regex, default_build_files_regex());
    assert_eq!(config.diff_context_lines, 100_000);
    assert_eq!(config.result_suffix, ".changedlibs.result");
    assert!(config.output_dir.is_none());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
build_files_regex: ".*\\.gradle"
output_format: json
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.build_files_regex, r".*\.gradle");
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.result_suffix, default_result_suffix());
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
code_files_regex: ".*\\.java"
future_option: 3
"#;
    assert!(Config::from_yaml(yaml).is_ok());
}

#[test]
fn test_output_dir_parsed() {
    let config = Config::from_yaml("output_dir: results\n").unwrap();
    assert_eq!(config.output_dir.unwrap().to_str(), Some("results"));
}

#[test]
fn test_invalid_regex_rejected() {
    let err = Config::from_yaml("build_files_regex: \"[unclosed\"\n").unwrap_err();
    match err {
        LibChangeError::ConfigError(msg) => {
            assert!(msg.contains("build_files_regex"));
            assert!(msg.contains("[unclosed"));
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_empty_regex_rejected() {
    let err = Config::from_yaml("build_files_regex: \"  \"\n").unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn test_zero_context_rejected() {
    assert!(Config::from_yaml("diff_context_lines: 0\n").is_err());
}

#[test]
fn test_suffix_with_separator_rejected() {
    let err = Config::from_yaml("result_suffix: \"/x.result\"\n").unwrap_err();
    assert!(err.to_string().contains("path separators"));
    assert!(Config::from_yaml("result_suffix: \"\"\n").is_err());
}

#[test]
fn test_malformed_yaml_rejected() {
    let err = Config::from_yaml("build_files_regex: [a, b\n").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_yaml_roundtrip_preserves_values() {
    let config = Config {
        output_format: OutputFormat::Json,
        diff_context_lines: 50,
        ..Default::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_discover_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("custom.yaml");
    std::fs::write(&explicit, "diff_context_lines: 7\n").unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "diff_context_lines: 9\n").unwrap();

    let config = Config::discover(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.diff_context_lines, 7);
}

#[test]
fn test_discover_uses_file_in_search_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "diff_context_lines: 9\n").unwrap();

    let config = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config.diff_context_lines, 9);
}

#[test]
fn test_discover_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");
    assert!(Config::discover(Some(&missing), dir.path()).is_err());
}
