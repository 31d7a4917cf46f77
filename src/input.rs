//! Loading chart data from files or stdin.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{Result, SegmentBarError};
use crate::segment::{SegmentBarConfig, SegmentDatum};

/// Path argument meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Parse JSON chart input.
///
/// Accepts either a bare array of segments or an object with a `data` array
/// and optional `width` / `height`.
///
/// # Errors
/// Returns an error if the text is not valid JSON or does not match either shape.
pub fn parse_chart_json(content: &str) -> Result<SegmentBarConfig> {
    let value: Value = serde_json::from_str(content).map_err(SegmentBarError::JsonParse)?;

    match value {
        Value::Array(_) => {
            let data: Vec<SegmentDatum> =
                serde_json::from_value(value).map_err(SegmentBarError::JsonParse)?;
            Ok(SegmentBarConfig::new(data))
        }
        Value::Object(ref map) if map.contains_key("data") => {
            serde_json::from_value(value).map_err(SegmentBarError::JsonParse)
        }
        Value::Object(_) => Err(SegmentBarError::InvalidInput(
            "object input must contain a `data` array".to_string(),
        )),
        _ => Err(SegmentBarError::InvalidInput(
            "expected an array of segments or an object with a `data` array".to_string(),
        )),
    }
}

/// Parse TOML chart input: optional `width` / `height` plus `[[data]]` tables.
///
/// # Errors
/// Returns an error if the text is not valid TOML or a segment is malformed.
pub fn parse_chart_toml(content: &str) -> Result<SegmentBarConfig> {
    Ok(toml::from_str(content)?)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Load a chart from `path`, or from stdin when `path` is `None` or `-`.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
///
/// # Errors
/// Returns an error if the input cannot be read or parsed.
pub fn load_chart(path: Option<&Path>) -> Result<SegmentBarConfig> {
    match path {
        Some(path) if path.as_os_str() != STDIN_PATH => {
            let content = std::fs::read_to_string(path).map_err(|source| {
                SegmentBarError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            debug!("Loaded chart input from {}", path.display());
            if is_toml(path) {
                parse_chart_toml(&content)
            } else {
                parse_chart_json(&content)
            }
        }
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            debug!("Loaded chart input from stdin ({} bytes)", content.len());
            parse_chart_json(&content)
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
