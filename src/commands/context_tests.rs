use tempfile::TempDir;

use super::*;
use crate::config::Config;
use crate::segment::Locale;
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, SegmentBarError};

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_INPUT_ERROR, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn load_config_no_config_returns_default() {
    let result = load_config(None, true).unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn load_config_explicit_path_beats_no_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bar.toml");
    std::fs::write(&config_path, "[output]\ntitle = \"Explicit\"\n").unwrap();

    let result = load_config(Some(&config_path), true).unwrap();

    assert_eq!(result.config.output.title, "Explicit");
}

#[test]
fn load_config_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bar.toml");
    std::fs::write(&config_path, "[render]\nlocale = \"plain\"\n").unwrap();

    let result = load_config(Some(&config_path), false).unwrap();

    assert_eq!(result.config.render.locale, Locale::Plain);
    assert_eq!(result.source.as_deref(), Some(config_path.as_path()));
}

#[test]
fn load_config_missing_explicit_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing.toml");

    let err = load_config(Some(&config_path), false).unwrap_err();
    assert!(matches!(err, SegmentBarError::FileRead { .. }));
}

#[test]
fn write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.html");

    write_output(Some(&output_path), "test content").unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, "test content");
}

#[test]
fn write_output_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("nested/dir/bar.svg");

    write_output(Some(&output_path), "<svg/>").unwrap();

    assert!(output_path.exists());
}
