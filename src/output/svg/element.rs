//! Primitive SVG elements: segment rectangles and text labels.

use std::fmt::Write;

use crate::surface::html_escape;

use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A filled rectangle with an optional hover tooltip.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub class: Option<String>,
    pub tooltip: Option<String>,
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let color = html_escape(&self.color.to_css());
        let mut output = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}""#,
            self.x, self.y, self.width, self.height
        );
        if let Some(class) = &self.class {
            let _ = write!(output, r#" class="{}""#, html_escape(class));
        }

        match &self.tooltip {
            // Accessibility: title element for screen readers and hover tooltip
            Some(tooltip) => {
                let escaped = html_escape(tooltip);
                let _ = write!(output, ">\n    <title>{escaped}</title>\n</rect>");
            }
            None => output.push_str("/>"),
        }
        output
    }
}

/// A single-line text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub color: ChartColor,
    pub font_size: f64,
}

impl Label {
    #[must_use]
    pub fn centered(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Middle,
            color: ChartColor::css_var("text"),
            font_size: 12.0,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" fill="{}" font-size="{}">{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.text)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
