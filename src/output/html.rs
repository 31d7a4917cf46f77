use std::fmt::Write;

use crate::error::Result;
use crate::segment::{SegmentBarConfig, SegmentBarRenderer};
use crate::surface::{ElementTree, html_escape};

use super::OutputFormatter;
use super::html_template::{HTML_FOOTER, HTML_HEAD_END, HTML_HEAD_START};

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Segment Bar";

/// Render the bar into a fresh element tree and serialize it.
fn render_fragment(renderer: &SegmentBarRenderer, chart: &SegmentBarConfig) -> String {
    let mut chart = chart.clone();
    let mut tree = ElementTree::default();
    renderer.render(&mut tree, &mut chart);
    tree.to_html()
}

/// Just the bar element, for embedding into an existing page.
#[derive(Debug, Clone, Default)]
pub struct FragmentFormatter {
    renderer: SegmentBarRenderer,
}

impl FragmentFormatter {
    #[must_use]
    pub const fn new(renderer: SegmentBarRenderer) -> Self {
        Self { renderer }
    }
}

impl OutputFormatter for FragmentFormatter {
    fn format(&self, chart: &SegmentBarConfig) -> Result<String> {
        Ok(render_fragment(&self.renderer, chart))
    }
}

/// Standalone HTML document with the segment bar style sheet embedded.
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    renderer: SegmentBarRenderer,
    title: String,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(SegmentBarRenderer::default())
    }
}

impl HtmlFormatter {
    #[must_use]
    pub fn new(renderer: SegmentBarRenderer) -> Self {
        Self {
            renderer,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn write_header(&self, output: &mut String) {
        output.push_str(HTML_HEAD_START);
        output.push_str(&html_escape(&self.title));
        output.push_str(HTML_HEAD_END);
        let _ = writeln!(output, "        <h1>{}</h1>", html_escape(&self.title));
    }

    fn write_chart(&self, output: &mut String, chart: &SegmentBarConfig) {
        output.push_str("        <div class=\"chart-container\">\n");
        for line in render_fragment(&self.renderer, chart).lines() {
            let _ = writeln!(output, "            {line}");
        }
        output.push_str("        </div>\n");
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, chart: &SegmentBarConfig) -> Result<String> {
        let mut output = String::new();
        self.write_header(&mut output);
        self.write_chart(&mut output, chart);
        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
