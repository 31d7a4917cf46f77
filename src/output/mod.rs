mod html;
mod html_template;
mod json;
pub mod svg;
mod svg_formatter;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use html::{DEFAULT_TITLE, FragmentFormatter, HtmlFormatter};
pub use json::JsonFormatter;
pub use svg_formatter::SvgFormatter;

use crate::error::Result;
use crate::segment::{SegmentBarConfig, SegmentBarRenderer};

/// Trait for turning chart data into a textual output format.
pub trait OutputFormatter {
    /// Format the chart into a string. The caller's data is left untouched.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, chart: &SegmentBarConfig) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Fragment,
    Svg,
    Json,
}

impl OutputFormat {
    /// Conventional file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html | Self::Fragment => "html",
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "fragment" => Ok(Self::Fragment),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Fragment => write!(f, "fragment"),
            Self::Svg => write!(f, "svg"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Build the formatter for `format`. `title` is used by document formats.
#[must_use]
pub fn create_formatter(
    format: OutputFormat,
    renderer: SegmentBarRenderer,
    title: &str,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Html => Box::new(HtmlFormatter::new(renderer).with_title(title)),
        OutputFormat::Fragment => Box::new(FragmentFormatter::new(renderer)),
        OutputFormat::Svg => Box::new(SvgFormatter::new(renderer).with_title(title)),
        OutputFormat::Json => Box::new(JsonFormatter::new(renderer)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
