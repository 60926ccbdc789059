//! Integration tests for loading config files and turning them into output.
//!
//! Tests the acceptance criteria:
//! - Missing config file falls back to defaults
//! - Config values flow into encoding options
//! - Unreadable or malformed files are reported with their path

use std::path::PathBuf;
use tempfile::TempDir;

use glyphmap::cli::{render_output, OutputFormat};
use glyphmap::config::{Config, ConfigError, DEFAULT_CONFIG};
use glyphmap::minimap::{encode, EncodingOptions};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.encoding_options().unwrap(), EncodingOptions::default());
}

#[test]
fn test_default_config_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, DEFAULT_CONFIG);
    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_drives_encoding() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[encode]
rows = 1
trim = false

[symbols]
family = "dot"
shape = "4x2"
"#,
    );
    let options = Config::load(Some(path.as_path())).unwrap().encoding_options().unwrap();

    let lines = vec!["xx"; 8];
    let out = encode(&lines, &options).unwrap();
    assert_eq!(out, vec!["\u{28FF}"]);
}

#[test]
fn test_ascii_fallback_table_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[symbols]
shape = "2x1"
glyphs = [" ", "'", ".", ":"]
"#,
    );
    let options = Config::load(Some(path.as_path())).unwrap().encoding_options().unwrap();
    let out = encode(&["a b", " bb"], &options).unwrap();
    assert_eq!(out, vec!["'.:"]);
}

#[test]
fn test_parse_error_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[encode]\nrows = \"ten\"\n");
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_io_error_on_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::create_dir(&path).unwrap();
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::IoError { .. }));
}

#[test]
fn test_json_output_is_array_of_rows() {
    let options = EncodingOptions::default();
    let lines = vec!["aa"; 6];
    let rows = encode(&lines, &options).unwrap();
    let json = render_output(&rows, OutputFormat::Json).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, vec!["█", "█"]);
}
