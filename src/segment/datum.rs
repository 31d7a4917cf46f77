//! Chart input model: segment data and per-render configuration.

use serde::{Deserialize, Serialize};

/// Bar width used when the chart does not specify one.
pub const DEFAULT_WIDTH: &str = "100%";

/// Bar height used when the chart does not specify one.
pub const DEFAULT_HEIGHT: &str = "60px";

/// Source data for a single bar segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDatum {
    /// Non-negative magnitude (count, views, ...)
    pub value: f64,

    /// Display label. Empty titles are treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Explicit background color. Falls back to the palette when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Share of the total in `[0, 1]`, written by the renderer.
    ///
    /// Never read from input; any value present there is discarded.
    #[serde(default, skip_deserializing)]
    pub percent: f64,
}

impl SegmentDatum {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            title: None,
            color: None,
            percent: 0.0,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The title, if present and non-empty.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The explicit color, if present and non-empty.
    #[must_use]
    pub fn explicit_color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.is_empty())
    }
}

/// Everything needed for one render call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentBarConfig {
    /// Segments in left-to-right order.
    #[serde(default)]
    pub data: Vec<SegmentDatum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl SegmentBarConfig {
    #[must_use]
    pub const fn new(data: Vec<SegmentDatum>) -> Self {
        Self {
            data,
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Effective width; empty strings fall back to [`DEFAULT_WIDTH`].
    #[must_use]
    pub fn resolved_width(&self) -> &str {
        self.width
            .as_deref()
            .filter(|w| !w.is_empty())
            .unwrap_or(DEFAULT_WIDTH)
    }

    /// Effective height; empty strings fall back to [`DEFAULT_HEIGHT`].
    #[must_use]
    pub fn resolved_height(&self) -> &str {
        self.height
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
#[path = "datum_tests.rs"]
mod tests;
