//! Segment bar drawn as an SVG: one rectangle per segment, left to right.

use crate::segment::{CLASS_BAR, CLASS_ITEM, CLASS_SMALL, SegmentLayout, SegmentView};

use super::builder::SvgBuilder;
use super::element::{Label, Rect, SvgElement};
use super::style::ChartColor;

/// Width of the viewBox; segments are scaled into it and the SVG stretches to fit.
pub const VIEWBOX_WIDTH: f64 = 1000.0;

/// Height used when the layout height is not given in pixels.
pub const FALLBACK_HEIGHT: f64 = 60.0;

/// SVG rendition of a resolved [`SegmentLayout`].
#[derive(Debug)]
pub struct SegmentBarSvg {
    layout: SegmentLayout,
    title: String,
}

impl SegmentBarSvg {
    #[must_use]
    pub fn new(layout: SegmentLayout) -> Self {
        Self {
            layout,
            title: String::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// viewBox height: the layout height when it is a pixel length.
    #[must_use]
    pub fn view_height(&self) -> f64 {
        self.layout
            .height
            .trim()
            .strip_suffix("px")
            .and_then(|h| h.trim().parse::<f64>().ok())
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(FALLBACK_HEIGHT)
    }

    /// SVG cannot draw negative or NaN widths; those segments collapse to zero.
    fn segment_width(segment: &SegmentView) -> f64 {
        let width = segment.width_percent / 100.0 * VIEWBOX_WIDTH;
        if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        }
    }

    fn segment_rect(segment: &SegmentView, x: f64, width: f64, height: f64) -> Rect {
        let class = if segment.small {
            format!("{CLASS_SMALL} {CLASS_ITEM}")
        } else {
            CLASS_ITEM.to_string()
        };
        let tooltip = segment.tooltip.clone().unwrap_or_else(|| {
            format!("{} ({})", segment.percentage_label, segment.value_label)
        });

        Rect {
            x,
            y: 0.0,
            width,
            height,
            color: ChartColor::literal(&segment.color),
            class: Some(class),
            tooltip: Some(tooltip),
        }
    }
}

impl SvgElement for SegmentBarSvg {
    fn render(&self) -> String {
        let height = self.view_height();
        let mut builder = SvgBuilder::new(VIEWBOX_WIDTH, height)
            .with_title(self.title.clone())
            .with_class(CLASS_BAR);

        if self.layout.is_empty() {
            let empty = Label::centered(VIEWBOX_WIDTH / 2.0, height / 2.0, "No data available")
                .with_color(ChartColor::css_var("text-muted"))
                .with_font_size(14.0);
            return builder.push_element(&empty).build();
        }

        let mut x = 0.0;
        for segment in &self.layout.segments {
            let width = Self::segment_width(segment);
            builder = builder.push_element(&Self::segment_rect(segment, x, width, height));

            if !segment.small && width > 0.0 {
                let label =
                    Label::centered(x + width / 2.0, height / 2.0, &segment.percentage_label);
                builder = builder.push_element(&label);
            }
            x += width;
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "segment_chart_tests.rs"]
mod tests;
