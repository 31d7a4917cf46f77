//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot be rendered sensibly.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{CONFIG_VERSION, Config};
use crate::{Result, SegmentBarError};

static CSS_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:auto|\d+(?:\.\d+)?(?:px|%|em|rem|vw|vh|pt))$").expect("Invalid regex")
});

static CSS_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(?:rgba?|hsla?)\([^()]*\)|[a-zA-Z]+)$",
    )
    .expect("Invalid regex")
});

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the version is unsupported, a dimension is not a CSS
/// length, `small_threshold` is outside `0..=100`, or the palette is empty or
/// holds something that is not a color.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_render_section(config)?;
    validate_palette(config)?;
    Ok(())
}

/// Returns `true` for values like `60px`, `100%`, `1.5em` or `auto`.
#[must_use]
pub fn is_css_length(value: &str) -> bool {
    CSS_LENGTH.is_match(value.trim())
}

/// Returns `true` for hex, `rgb()`/`hsl()` style or named colors.
#[must_use]
pub fn is_css_color(value: &str) -> bool {
    CSS_COLOR.is_match(value.trim())
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(SegmentBarError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_render_section(config: &Config) -> Result<()> {
    let render = &config.render;

    if !is_css_length(&render.width) {
        return Err(SegmentBarError::Config(format!(
            "render.width must be a CSS length, got '{}'",
            render.width
        )));
    }
    if !is_css_length(&render.height) {
        return Err(SegmentBarError::Config(format!(
            "render.height must be a CSS length, got '{}'",
            render.height
        )));
    }

    if !render.small_threshold.is_finite() || !(0.0..=100.0).contains(&render.small_threshold) {
        return Err(SegmentBarError::Config(format!(
            "render.small_threshold must be between 0 and 100, got {}",
            render.small_threshold
        )));
    }
    Ok(())
}

fn validate_palette(config: &Config) -> Result<()> {
    let Some(palette) = &config.render.palette else {
        return Ok(());
    };

    if palette.is_empty() {
        return Err(SegmentBarError::Config(
            "render.palette must contain at least one color".to_string(),
        ));
    }

    for (i, color) in palette.iter().enumerate() {
        if !is_css_color(color) {
            return Err(SegmentBarError::Config(format!(
                "render.palette[{i}] is not a valid color: '{color}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
