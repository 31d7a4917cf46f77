use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::{DEFAULT_TITLE, OutputFormat};
use crate::segment::{
    DEFAULT_HEIGHT, DEFAULT_SMALL_THRESHOLD, DEFAULT_WIDTH, Locale, MountMode, Palette,
    SegmentBarConfig, SegmentBarRenderer, ZeroTotalPolicy,
};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Render defaults, `[render]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Bar width when the chart input does not set one.
    #[serde(default = "default_width")]
    pub width: String,

    /// Bar height when the chart input does not set one.
    #[serde(default = "default_height")]
    pub height: String,

    #[serde(default)]
    pub locale: Locale,

    /// Segments narrower than this percentage are marked small.
    #[serde(default = "default_small_threshold")]
    pub small_threshold: f64,

    #[serde(default)]
    pub zero_total: ZeroTotalPolicy,

    #[serde(default)]
    pub mount: MountMode,

    /// Replacement palette. `None` keeps the built-in colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            locale: Locale::default(),
            small_threshold: default_small_threshold(),
            zero_total: ZeroTotalPolicy::default(),
            mount: MountMode::default(),
            palette: None,
        }
    }
}

/// Output defaults, `[output]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Document title for html and svg output.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Config format version; must be "1" when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Build a renderer from the `[render]` section.
    ///
    /// # Errors
    /// Returns an error if the configured palette is empty.
    pub fn renderer(&self) -> Result<SegmentBarRenderer> {
        let mut renderer = SegmentBarRenderer::new()
            .with_locale(self.render.locale)
            .with_small_threshold(self.render.small_threshold)
            .with_zero_total(self.render.zero_total)
            .with_mount(self.render.mount);
        if let Some(colors) = &self.render.palette {
            renderer = renderer.with_palette(Palette::new(colors.clone())?);
        }
        Ok(renderer)
    }

    /// Fill in `width` / `height` the chart input left unset.
    pub fn apply_dimensions(&self, chart: &mut SegmentBarConfig) {
        if chart.width.as_deref().is_none_or(str::is_empty) {
            chart.width = Some(self.render.width.clone());
        }
        if chart.height.as_deref().is_none_or(str::is_empty) {
            chart.height = Some(self.render.height.clone());
        }
    }
}

fn default_width() -> String {
    DEFAULT_WIDTH.to_string()
}

fn default_height() -> String {
    DEFAULT_HEIGHT.to_string()
}

const fn default_small_threshold() -> f64 {
    DEFAULT_SMALL_THRESHOLD
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
