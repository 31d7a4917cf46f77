use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SegmentBarError};

use super::context::{load_config, report_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { path } => run_config_validate(path),
        ConfigAction::Show { format } => run_config_show(*format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(SegmentBarError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(format: ConfigOutputFormat, cli: &Cli) -> Result<String> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    format_config(&loaded, format)
}

/// Serialize a loaded config. TOML output notes where it came from.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_config(loaded: &LoadResult, format: ConfigOutputFormat) -> Result<String> {
    match format {
        ConfigOutputFormat::Toml => {
            let source = loaded.source.as_ref().map_or_else(
                || "built-in defaults".to_string(),
                |path| path.display().to_string(),
            );
            let body = toml::to_string_pretty(&loaded.config)?;
            Ok(format!("# Source: {source}\n{body}"))
        }
        ConfigOutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&loaded.config)
                .map_err(SegmentBarError::JsonSerialize)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
