use crate::error::{Result, SegmentBarError};
use crate::segment::{SegmentBarConfig, SegmentBarRenderer};

use super::OutputFormatter;

/// Pretty-printed [`SegmentLayout`](crate::segment::SegmentLayout).
///
/// `NaN` percentages (zero totals under the propagate policy) serialize as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    renderer: SegmentBarRenderer,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(renderer: SegmentBarRenderer) -> Self {
        Self { renderer }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, chart: &SegmentBarConfig) -> Result<String> {
        let mut chart = chart.clone();
        let layout = self.renderer.layout(&mut chart);
        serde_json::to_string_pretty(&layout).map_err(SegmentBarError::JsonSerialize)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
