//! Resolved, toolkit-independent description of a rendered bar.

use serde::Serialize;

use super::number::format_js_number;

/// Everything needed to draw one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentView {
    /// Position in the input data.
    pub index: usize,
    pub value: f64,
    /// Share of the total in `[0, 1]`.
    pub percent: f64,
    /// `percent * 100`, used for the segment width.
    pub width_percent: f64,
    pub color: String,
    /// Below the small-segment threshold; labels may need abbreviating.
    pub small: bool,
    /// Prettified percentage with a trailing `%`.
    pub percentage_label: String,
    /// Locale-formatted raw value.
    pub value_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `"{title} ({value})"`, present only with a title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl SegmentView {
    /// Inline CSS width, e.g. `33.333333333333336%`.
    #[must_use]
    pub fn width_style(&self) -> String {
        format!("{}%", format_js_number(self.width_percent))
    }
}

/// A fully resolved bar: dimensions plus one view per datum, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentLayout {
    pub width: String,
    pub height: String,
    /// Sum of all input values.
    pub total: f64,
    pub segments: Vec<SegmentView>,
}

impl SegmentLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of segment widths in percent; 100 for any input with a positive total.
    #[must_use]
    pub fn width_sum(&self) -> f64 {
        self.segments.iter().map(|s| s.width_percent).sum()
    }
}

/// Tooltip text for a titled segment.
#[must_use]
pub fn segment_tooltip(title: &str, value: f64) -> String {
    format!("{title} ({})", format_js_number(value))
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
