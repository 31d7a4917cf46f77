use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::config::Config;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("bar.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_accepts_good_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "version = \"1\"\n[render]\nheight = \"30px\"\n");

    assert!(run_config_validate_impl(&path).is_ok());
    assert_eq!(run_config_validate(&path), EXIT_SUCCESS);
}

#[test]
fn validate_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn validate_reports_syntax_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[render\n");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, SegmentBarError::TomlParse(_)));
    assert_eq!(run_config_validate(&path), EXIT_CONFIG_ERROR);
}

#[test]
fn validate_reports_semantic_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[render]\npalette = []\n");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(err.to_string().contains("render.palette"));
}

#[test]
fn format_defaults_as_toml() {
    let loaded = LoadResult {
        config: Config::default(),
        source: None,
    };

    let output = format_config(&loaded, ConfigOutputFormat::Toml).unwrap();

    assert!(output.starts_with("# Source: built-in defaults\n"));
    assert!(output.contains("[render]"));
    assert!(output.contains("locale = \"en-US\""));
    assert!(output.contains("mount = \"append\""));
    assert!(output.contains("format = \"html\""));
}

#[test]
fn format_toml_names_source_file() {
    let loaded = LoadResult {
        config: Config::default(),
        source: Some(PathBuf::from("/tmp/bar.toml")),
    };

    let output = format_config(&loaded, ConfigOutputFormat::Toml).unwrap();
    assert!(output.starts_with("# Source: /tmp/bar.toml\n"));
}

#[test]
fn format_as_json() {
    let loaded = LoadResult {
        config: Config::default(),
        source: None,
    };

    let output = format_config(&loaded, ConfigOutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["render"]["zero_total"], "zero-width");
    assert_eq!(value["output"]["title"], "Segment Bar");
}

#[test]
fn show_uses_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[render]\nlocale = \"de-CH\"\n");
    let path_arg = path.to_string_lossy().to_string();
    let cli = Cli::parse_from(["segment-bar", "--config", &path_arg, "config", "show"]);

    let output = run_config_show_impl(ConfigOutputFormat::Toml, &cli).unwrap();

    assert!(output.contains("locale = \"de-CH\""));
}
