use crate::error::Result;
use crate::segment::{SegmentBarConfig, SegmentBarRenderer};

use super::OutputFormatter;
use super::svg::{SegmentBarSvg, SvgElement};

/// Standalone SVG image of the bar.
#[derive(Debug, Clone, Default)]
pub struct SvgFormatter {
    renderer: SegmentBarRenderer,
    title: String,
}

impl SvgFormatter {
    #[must_use]
    pub const fn new(renderer: SegmentBarRenderer) -> Self {
        Self {
            renderer,
            title: String::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl OutputFormatter for SvgFormatter {
    fn format(&self, chart: &SegmentBarConfig) -> Result<String> {
        let mut chart = chart.clone();
        let layout = self.renderer.layout(&mut chart);
        let mut svg = SegmentBarSvg::new(layout)
            .with_title(self.title.clone())
            .render();
        svg.push('\n');
        Ok(svg)
    }
}
